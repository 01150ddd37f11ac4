use crate::components::reveal::Reveal;
use yew::prelude::*;

const STEPS: [(&str, &str, &str, &str); 6] = [
    ("01", "💬", "Consulta Inicial", "Nos reunimos contigo para entender tus objetivos, necesidades y visión. Analizamos tu situación actual y definimos metas claras."),
    ("02", "🎯", "Estrategia & Planificación", "Diseñamos una estrategia personalizada con roadmap detallado, cronograma de entregas y KPIs medibles para garantizar el éxito."),
    ("03", "⚙️", "Desarrollo & Implementación", "Nuestro equipo de expertos da vida a tu proyecto utilizando las mejores prácticas y tecnologías de vanguardia."),
    ("04", "🔍", "Pruebas & Optimización", "Realizamos pruebas exhaustivas, optimizamos el rendimiento y nos aseguramos de que todo funcione perfectamente."),
    ("05", "🚀", "Lanzamiento & Entrega", "Desplegamos tu proyecto y te capacitamos para que puedas aprovechar al máximo todas las funcionalidades."),
    ("06", "📈", "Soporte & Crecimiento", "Te acompañamos con soporte continuo, actualizaciones y mejoras para mantener tu proyecto en la cima."),
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process-section">
            <div class="section-inner">
                <h2 class="section-title">{"Nuestro "}<span class="gradient-text">{"Proceso"}</span></h2>
                <p class="section-subtitle">{"Un método probado, de la primera conversación al crecimiento continuo"}</p>
                <div class="process-grid">
                    { for STEPS.iter().enumerate().map(|(index, (number, icon, title, description))| html! {
                        <Reveal index={index} class={classes!("card-dark", "process-step")}>
                            <div class="step-header">
                                <span class="step-number">{*number}</span>
                                <span class="step-icon">{*icon}</span>
                            </div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .process-section {
        background: #000;
    }
    .process-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .step-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .step-number {
        font-family: 'Orbitron', sans-serif;
        font-size: 2.5rem;
        color: rgba(0, 255, 156, 0.35);
    }
    .step-icon {
        font-size: 2rem;
    }
    .process-step h3 {
        margin: 1rem 0 0.5rem;
    }
    .process-step p {
        color: #9ca3af;
        line-height: 1.6;
    }
    @media (max-width: 1024px) {
        .process-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
