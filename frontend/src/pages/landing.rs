use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio::Portfolio, process::Process, services::Services, stats::Stats,
    testimonials::Testimonials,
};
use crate::utils::dom::DomListener;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    // Log tab visibility changes
    {
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|w| w.document()).and_then(|document| {
                    let doc = document.clone();
                    DomListener::new(&document, "visibilitychange", move |_| {
                        if doc.hidden() {
                            log::debug!("Page hidden");
                        } else {
                            log::debug!("Page visible");
                        }
                    })
                    .ok()
                });
                move || drop(listener)
            },
            (),
        );
    }
    html! {
        <main class="landing-page">
            <Navbar />
            <Hero />
            <Stats />
            <Services />
            <About />
            <Process />
            <Portfolio />
            <Testimonials />
            <Contact />
            <Footer />
            <style>
                {r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Inter', sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .landing-page section {
        position: relative;
    }
    .section-inner {
        max-width: 1200px;
        margin: 0 auto;
        padding: 6rem 2rem;
    }
    .section-title {
        font-family: 'Orbitron', sans-serif;
        font-size: 2.75rem;
        text-align: center;
        margin: 0 0 1rem;
    }
    .section-subtitle {
        text-align: center;
        color: #9ca3af;
        font-size: 1.2rem;
        max-width: 720px;
        margin: 0 auto 4rem;
    }
    .gradient-text {
        background: linear-gradient(45deg, #00ff9c, #34d399, #22d3ee);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .landing-page .reveal {
        opacity: 0;
        translate: 0 30px;
        transition: opacity 0.6s ease, translate 0.6s ease, border-color 0.3s ease, transform 0.3s ease;
    }
    .landing-page .reveal.active {
        opacity: 1;
        translate: none;
    }
    .card-dark {
        background: rgba(17, 24, 39, 0.6);
        border: 1px solid rgba(55, 65, 81, 0.6);
        border-radius: 16px;
        padding: 2rem;
        transition: border-color 0.3s ease, transform 0.3s ease;
    }
    .card-dark:hover {
        border-color: rgba(0, 255, 156, 0.4);
        transform: translateY(-4px);
    }
    .btn-primary {
        display: inline-block;
        padding: 0.9rem 2rem;
        border: none;
        border-radius: 9999px;
        background: #00ff9c;
        color: #000;
        font-weight: 700;
        cursor: pointer;
        text-decoration: none;
        transition: box-shadow 0.3s ease, transform 0.3s ease;
    }
    .btn-primary:hover {
        box-shadow: 0 0 24px rgba(0, 255, 156, 0.45);
        transform: translateY(-2px);
    }
    .btn-primary:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .btn-secondary {
        display: inline-block;
        padding: 0.9rem 2rem;
        border: 1px solid #00ff9c;
        border-radius: 9999px;
        background: transparent;
        color: #00ff9c;
        font-weight: 700;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .section-inner {
            padding: 4rem 1rem;
        }
        .section-title {
            font-size: 2rem;
        }
    }
                "#}
            </style>
        </main>
    }
}
