use crate::components::reveal::Reveal;
use yew::prelude::*;

const VALUES: [(&str, &str, &str); 4] = [
    ("⚡", "Innovación", "Utilizamos las últimas tecnologías y metodologías para crear soluciones que marquen la diferencia."),
    ("🎯", "Resultados", "Nos enfocamos en métricas reales y ROI medible. Tu éxito es nuestro éxito."),
    ("🤝", "Colaboración", "Trabajamos codo a codo contigo, convirtiéndonos en parte de tu equipo."),
    ("💎", "Calidad", "Cada proyecto se entrega con los más altos estándares de excelencia y profesionalismo."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-inner about-grid">
                <div class="about-copy">
                    <span class="eyebrow">{"Sobre Nosotros"}</span>
                    <h2>
                        {"Transformamos "}<span class="gradient-text">{"Ideas"}</span>
                        {" en "}<span class="gradient-text">{"Realidad Digital"}</span>
                    </h2>
                    <p>
                        {"En "}<span class="accent">{"Arcano Intelligence"}</span>
                        {", somos un equipo de expertos apasionados por la tecnología y la innovación. Desde 2020, hemos ayudado a empresas de todos los tamaños a transformarse digitalmente y alcanzar sus objetivos de negocio."}
                    </p>
                    <p>
                        {"Combinamos expertise en inteligencia artificial, desarrollo web y diseño estratégico para crear soluciones que no solo se ven increíbles, sino que generan resultados tangibles y escalables."}
                    </p>
                </div>
                <div class="values-grid">
                    { for VALUES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                        <Reveal index={index} class={classes!("card-dark", "value-card")}>
                            <div class="value-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .about-section {
        background: #000;
    }
    .about-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .eyebrow {
        color: #00ff9c;
        font-weight: 600;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .about-copy h2 {
        font-size: 2.75rem;
        margin: 1rem 0 1.5rem;
    }
    .about-copy p {
        color: #9ca3af;
        font-size: 1.1rem;
        line-height: 1.7;
    }
    .accent {
        color: #00ff9c;
        font-weight: 600;
    }
    .values-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .value-icon {
        font-size: 2rem;
    }
    .value-card h3 {
        margin: 0.75rem 0 0.5rem;
    }
    .value-card p {
        color: #9ca3af;
        font-size: 0.95rem;
        margin: 0;
    }
    @media (max-width: 1024px) {
        .about-grid, .values-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
