use crate::components::reveal::Reveal;
use yew::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 5],
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "🤖",
        title: "Automatización con IA",
        description: "Implementamos sistemas de inteligencia artificial que automatizan tareas repetitivas, optimizan procesos y reducen costos operativos hasta un 70%.",
        features: [
            "Chatbots inteligentes 24/7",
            "Análisis predictivo de datos",
            "Automatización de workflows",
            "Procesamiento de documentos con IA",
            "Asistentes virtuales personalizados",
        ],
    },
    Service {
        icon: "💻",
        title: "Desarrollo Web",
        description: "Creamos sitios web y aplicaciones modernas, rápidas y escalables que convierten visitantes en clientes y destacan tu marca en el mundo digital.",
        features: [
            "Landing pages de alta conversión",
            "E-commerce y tiendas online",
            "Aplicaciones web personalizadas",
            "Diseño responsive y UX/UI",
            "Optimización SEO avanzada",
        ],
    },
    Service {
        icon: "🎨",
        title: "Branding Estratégico",
        description: "Desarrollamos identidades de marca únicas y memorables que conectan emocionalmente con tu audiencia y posicionan tu negocio como líder del mercado.",
        features: [
            "Diseño de logotipos profesionales",
            "Manual de identidad corporativa",
            "Estrategia de marca integral",
            "Material publicitario digital",
            "Guías de estilo y brandbook",
        ],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-inner">
                <h2 class="section-title">{"Nuestros "}<span class="gradient-text">{"Servicios"}</span></h2>
                <p class="section-subtitle">{"Soluciones tecnológicas completas para impulsar tu negocio hacia el futuro"}</p>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal index={index} class={classes!("card-dark", "service-card")}>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✓"}</span>{*feature}</li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .services-section {
        background: linear-gradient(180deg, #000 0%, #111827 50%, #000 100%);
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-icon {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .service-card h3 {
        font-size: 1.5rem;
        margin: 0 0 1rem;
    }
    .service-card p {
        color: #9ca3af;
        line-height: 1.6;
    }
    .service-card ul {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0 0;
    }
    .service-card li {
        display: flex;
        gap: 0.75rem;
        color: #d1d5db;
        margin-bottom: 0.6rem;
    }
    .check {
        color: #00ff9c;
    }
    @media (max-width: 1024px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
