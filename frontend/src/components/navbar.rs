use crate::config;
use crate::utils::dom::{self, DomListener};
use crate::utils::navigation::{
    active_section, is_scrolled, SectionBounds, NAV_HEIGHT_PX, NAV_LINKS,
};
use yew::prelude::*;

fn section_layout() -> Vec<SectionBounds<'static>> {
    NAV_LINKS
        .iter()
        .map(|(id, _)| *id)
        .chain(std::iter::once("contact"))
        .filter_map(|id| {
            dom::element_by_id(id).map(|el| SectionBounds {
                id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);

    // Solid background and active link both follow the scroll position
    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let y = dom::scroll_y();
                    scrolled.set(is_scrolled(y, config::NAV_SCROLLED_AFTER_PX));
                    active.set(active_section(&section_layout(), y, NAV_HEIGHT_PX));
                };
                update();
                let listener = web_sys::window()
                    .and_then(|window| DomListener::passive(&window, "scroll", move |_| update()).ok());
                move || {
                    drop(listener);
                    dom::set_body_scroll_locked(false);
                }
            },
            (),
        );
    }

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            dom::set_body_scroll_locked(false);
            dom::scroll_to_section(id, NAV_HEIGHT_PX);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            dom::set_body_scroll_locked(open);
            menu_open.set(open);
        })
    };

    let links = |extra_class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|(id, label)| {
                let id = *id;
                let go_to = go_to.clone();
                let is_active = *active == Some(id);
                html! {
                    <button
                        class={classes!(extra_class, is_active.then_some("active"))}
                        onclick={move |_| go_to.emit(id)}
                    >
                        {*label}
                    </button>
                }
            })
            .collect()
    };

    let contact_click = {
        let go_to = go_to.clone();
        move |_: MouseEvent| go_to.emit("contact")
    };
    let logo_click = {
        let go_to = go_to.clone();
        move |_: MouseEvent| go_to.emit("hero")
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-inner">
                <button class="nav-logo" onclick={logo_click} aria-label={config::SITE_NAME}>
                    <span class="logo-mark">{"ARCANO"}</span>
                    <span class="logo-sub">{"INTELLIGENCE"}</span>
                </button>
                <div class="nav-desktop">
                    { links("nav-link") }
                    <button class="btn-primary" onclick={contact_click.clone()}>{"Contactar"}</button>
                </div>
                <button
                    class={classes!("nav-toggle", (*menu_open).then_some("active"))}
                    onclick={toggle_menu}
                    aria-label="Menú"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { links("mobile-nav-link") }
                            <button class="mobile-nav-link highlight" onclick={contact_click}>{"Contactar"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
    .navbar {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        transition: background 0.3s ease, box-shadow 0.3s ease;
        background: transparent;
    }
    .navbar.scrolled {
        background: rgba(0, 0, 0, 0.95);
        backdrop-filter: blur(16px);
        box-shadow: 0 10px 30px rgba(0, 255, 156, 0.08);
    }
    .nav-inner {
        max-width: 1200px;
        height: 80px;
        margin: 0 auto;
        padding: 0 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        flex-direction: column;
        background: none;
        border: none;
        cursor: pointer;
        font-family: 'Orbitron', sans-serif;
        line-height: 1;
    }
    .logo-mark {
        color: #00ff9c;
        font-size: 1.4rem;
        letter-spacing: 0.15em;
    }
    .logo-sub {
        color: #fff;
        font-size: 0.6rem;
        letter-spacing: 0.4em;
    }
    .nav-desktop {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link, .mobile-nav-link {
        background: none;
        border: none;
        color: #d1d5db;
        font-weight: 500;
        font-size: 1rem;
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .nav-link:hover, .nav-link.active, .mobile-nav-link:hover, .mobile-nav-link.active,
    .mobile-nav-link.highlight {
        color: #00ff9c;
    }
    .nav-toggle {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .nav-toggle span {
        width: 24px;
        height: 2px;
        background: #d1d5db;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .nav-toggle.active span:nth-child(1) {
        transform: translateY(7px) rotate(45deg);
    }
    .nav-toggle.active span:nth-child(2) {
        opacity: 0;
    }
    .nav-toggle.active span:nth-child(3) {
        transform: translateY(-7px) rotate(-45deg);
    }
    .nav-mobile {
        display: flex;
        flex-direction: column;
        padding: 0.5rem 1rem 1rem;
        background: rgba(0, 0, 0, 0.98);
        border-top: 1px solid #1f2937;
    }
    .mobile-nav-link {
        text-align: left;
        padding: 0.75rem;
        border-radius: 8px;
    }
    @media (max-width: 768px) {
        .nav-desktop {
            display: none;
        }
        .nav-toggle {
            display: flex;
        }
        .nav-inner {
            padding: 0 1rem;
        }
    }
                "#}
            </style>
        </nav>
    }
}
