use crate::utils::dom::VisibilityObserver;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Position in its group; each step delays the fade by 100ms.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_visible = visible.clone();
                    match VisibilityObserver::observe(
                        &element,
                        0.1,
                        "0px 0px -50px 0px",
                        true,
                        move || on_visible.set(true),
                    ) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // No IntersectionObserver: just show the content.
                            log::debug!("Reveal disabled: {:?}", e);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }
    let style = format!("transition-delay: {:.1}s;", props.index as f64 * 0.1);
    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("active"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
