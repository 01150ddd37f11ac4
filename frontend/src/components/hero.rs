use crate::config::{self, ScrollVideoConfig};
use crate::scroll_video::{ScrollVideoController, ScrollVideoElements};
use crate::utils::dom;
use crate::utils::navigation::NAV_HEIGHT_PX;
use web_sys::{HtmlElement, HtmlVideoElement};
use yew::prelude::*;

const HERO_STATS: [(&str, &str); 4] = [
    ("100+", "Proyectos Completados"),
    ("50+", "Clientes Satisfechos"),
    ("98%", "Tasa de Éxito"),
    ("24/7", "Soporte Disponible"),
];

/// Tall hero section whose pinned background video follows the scroll.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let container_ref = use_node_ref();
    let video_ref = use_node_ref();
    let indicator_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let container_ref = container_ref.clone();
        let video_ref = video_ref.clone();
        let indicator_ref = indicator_ref.clone();
        use_effect_with_deps(
            move |_| {
                let controller = match (
                    section_ref.cast::<HtmlElement>(),
                    container_ref.cast::<HtmlElement>(),
                    video_ref.cast::<HtmlVideoElement>(),
                ) {
                    (Some(section), Some(container), Some(video)) => {
                        let config = ScrollVideoConfig::from_section(&section);
                        Some(ScrollVideoController::attach(
                            ScrollVideoElements {
                                section,
                                container,
                                video,
                                indicator: indicator_ref.cast::<HtmlElement>(),
                            },
                            config,
                        ))
                    }
                    _ => {
                        log::warn!("Scroll video elements not found");
                        None
                    }
                };
                move || drop(controller)
            },
            (),
        );
    }

    let scroll_to = |id: &'static str| {
        Callback::from(move |_: MouseEvent| dom::scroll_to_section(id, NAV_HEIGHT_PX))
    };

    html! {
        <section id="hero" ref={section_ref} class="video-scroll-section loading">
            <div class="video-sticky" ref={container_ref}>
                <video ref={video_ref} class="hero-video" muted=true playsinline=true preload="auto">
                    {
                        if config::HERO_VIDEO_SRC.is_empty() {
                            html! {}
                        } else {
                            html! { <source src={config::HERO_VIDEO_SRC} type="video/mp4" /> }
                        }
                    }
                </video>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="badge-dot"></span>
                        {"Transformamos tu negocio con IA"}
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-line">{"Bienvenido a"}</span>
                        <span class="hero-line gradient-text">{"ARCANO"}</span>
                        <span class="hero-line">{"INTELLIGENCE"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"🚀 Automatización con IA • 💻 Desarrollo Web • 🎨 Branding Estratégico"}
                    </p>
                    <p class="hero-lead">
                        {"Llevamos tu empresa al siguiente nivel con soluciones tecnológicas de vanguardia que optimizan procesos, aumentan productividad y generan resultados reales."}
                    </p>
                    <div class="hero-cta">
                        <button class="btn-primary" onclick={scroll_to("contact")}>{"📞 Iniciar Proyecto"}</button>
                        <button class="btn-secondary" onclick={scroll_to("services")}>{"🔍 Ver Servicios"}</button>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|(number, label)| html! {
                            <div class="hero-stat">
                                <div class="hero-stat-number">{*number}</div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="scroll-indicator" ref={indicator_ref} aria-hidden="true">
                    <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </div>
            </div>
            <style>
                {r#"
    .video-scroll-section {
        height: 300vh;
        background: #000;
    }
    .video-sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: opacity 0.6s ease;
    }
    .video-scroll-section.loading .hero-video {
        opacity: 0;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, rgba(0, 0, 0, 0.55) 0%, rgba(0, 0, 0, 0.35) 50%, rgba(0, 0, 0, 0.85) 100%);
        pointer-events: none;
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 960px;
        padding: 0 2rem;
        text-align: center;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border: 1px solid rgba(0, 255, 156, 0.3);
        border-radius: 9999px;
        background: rgba(0, 255, 156, 0.1);
        color: #00ff9c;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .badge-dot {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #00ff9c;
        box-shadow: 0 0 12px #00ff9c;
    }
    .hero-title {
        font-family: 'Orbitron', sans-serif;
        font-size: clamp(2.5rem, 8vw, 6rem);
        margin: 2rem 0;
    }
    .hero-line {
        display: block;
    }
    .hero-subtitle {
        font-size: 1.35rem;
        color: #9ca3af;
    }
    .hero-lead {
        font-size: 1.1rem;
        color: #6b7280;
        max-width: 640px;
        margin: 1rem auto 0;
    }
    .hero-cta {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
        padding-top: 2rem;
    }
    .hero-stats {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        padding-top: 3rem;
    }
    .hero-stat-number {
        font-family: 'Orbitron', sans-serif;
        font-size: 2rem;
        color: #00ff9c;
    }
    .hero-stat-label {
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        color: #00ff9c;
        z-index: 2;
        animation: indicator-bounce 1.6s infinite;
    }
    @keyframes indicator-bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }
    @media (max-width: 768px) {
        .hero-stats {
            grid-template-columns: repeat(2, 1fr);
        }
        .hero-subtitle {
            font-size: 1.05rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
