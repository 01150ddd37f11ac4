use std::cell::Cell;
use std::rc::Rc;

use crate::utils::animation::{counter_step_ms, counter_value, COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::utils::dom::VisibilityObserver;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

struct Stat {
    target: u32,
    suffix: &'static str,
    label: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: 100, suffix: "+", label: "Proyectos Completados", icon: "📊" },
    Stat { target: 50, suffix: "+", label: "Clientes Satisfechos", icon: "😊" },
    Stat { target: 98, suffix: "%", label: "Tasa de Éxito", icon: "🎯" },
    Stat { target: 5, suffix: "+", label: "Años de Experiencia", icon: "⭐" },
];

#[function_component(Stats)]
pub fn stats() -> Html {
    let node = use_node_ref();
    let step = use_state_eq(|| 0u32);

    // Count up once, the first time the section is 30% visible
    {
        let node = node.clone();
        let step = step.clone();
        use_effect_with_deps(
            move |_| {
                let started = Rc::new(Cell::new(false));
                let counter = step.clone();
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(&element, 0.3, "0px", true, move || {
                        if started.replace(true) {
                            return;
                        }
                        let counter = counter.clone();
                        spawn_local(async move {
                            let interval = counter_step_ms(COUNTER_DURATION_MS, COUNTER_STEPS);
                            for s in 1..=COUNTER_STEPS {
                                TimeoutFuture::new(interval).await;
                                counter.set(s);
                            }
                        });
                    })
                    .map_err(|e| log::debug!("Stats observer unavailable: {:?}", e))
                    .ok()
                });
                if observer.is_none() {
                    step.set(COUNTER_STEPS);
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section class="stats-section" ref={node}>
            <div class="stats-grid">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat-item">
                        <div class="stat-icon">{stat.icon}</div>
                        <div class="stat-number">
                            {format!("{}{}", counter_value(stat.target, *step, COUNTER_STEPS), stat.suffix)}
                        </div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
    .stats-section {
        padding: 5rem 2rem;
        background: linear-gradient(180deg, #000 0%, #111827 50%, #000 100%);
    }
    .stats-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .stat-item {
        text-align: center;
    }
    .stat-icon {
        font-size: 2.25rem;
        margin-bottom: 0.5rem;
        transition: transform 0.3s ease;
    }
    .stat-item:hover .stat-icon {
        transform: scale(1.1);
    }
    .stat-number {
        font-family: 'Orbitron', sans-serif;
        font-size: 3rem;
        font-weight: 700;
        color: #00ff9c;
    }
    .stat-label {
        color: #9ca3af;
        font-weight: 500;
    }
    @media (max-width: 768px) {
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .stat-number {
            font-size: 2.25rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
