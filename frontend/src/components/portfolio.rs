use crate::utils::dom::scroll_to_section;
use crate::utils::navigation::NAV_HEIGHT_PX;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Ai,
    Branding,
}

/// `None` shows every project.
pub type Filter = Option<Category>;

pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub tags: [&'static str; 3],
    pub icon: &'static str,
    pub stats: [(&'static str, &'static str); 2],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Premium",
        category: Category::Web,
        description: "Tienda online con sistema de pagos integrado y gestión de inventario automatizada.",
        tags: ["Next.js", "Stripe", "AI"],
        icon: "🛍️",
        stats: [("conversión", "+150%"), ("rendimiento", "98/100")],
    },
    Project {
        title: "ChatBot Inteligente",
        category: Category::Ai,
        description: "Asistente virtual con IA que automatiza el 80% de las consultas de clientes.",
        tags: ["OpenAI", "NLP", "Python"],
        icon: "🤖",
        stats: [("eficiencia", "+80%"), ("satisfacción", "4.8/5")],
    },
    Project {
        title: "Brand Identity",
        category: Category::Branding,
        description: "Renovación completa de identidad corporativa para startup tecnológica.",
        tags: ["Logo", "UI/UX", "Strategy"],
        icon: "🎨",
        stats: [("reconocimiento", "+200%"), ("engagement", "+120%")],
    },
    Project {
        title: "SaaS Dashboard",
        category: Category::Web,
        description: "Panel de control con analytics en tiempo real y visualización de datos.",
        tags: ["React", "D3.js", "API"],
        icon: "📊",
        stats: [("usuarios", "10K+"), ("uptime", "99.9%")],
    },
    Project {
        title: "Sistema de Automatización",
        category: Category::Ai,
        description: "Workflow automatizado que procesa y clasifica documentos con IA.",
        tags: ["TensorFlow", "OCR", "Cloud"],
        icon: "⚡",
        stats: [("tiempo ahorrado", "40hrs/sem"), ("precisión", "96%")],
    },
    Project {
        title: "Landing Page",
        category: Category::Web,
        description: "Página de alta conversión con animaciones y optimización SEO.",
        tags: ["Next.js", "SEO", "Analytics"],
        icon: "🚀",
        stats: [("velocidad", "95/100"), ("leads", "+300%")],
    },
];

const FILTERS: [(Filter, &str, &str); 4] = [
    (None, "Todos", "🌟"),
    (Some(Category::Web), "Web", "💻"),
    (Some(Category::Ai), "IA", "🤖"),
    (Some(Category::Branding), "Branding", "🎨"),
];

pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| filter.map_or(true, |category| p.category == category))
        .collect()
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state_eq(|| None::<Category>);

    let filter_buttons = FILTERS.iter().map(|(value, label, icon)| {
        let value = *value;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(value))
        };
        html! {
            <button
                class={classes!("filter-button", (*filter == value).then_some("active"))}
                {onclick}
            >
                {format!("{} {}", icon, label)}
            </button>
        }
    });

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="section-inner">
                <h2 class="section-title">{"Nuestro "}<span class="gradient-text">{"Portfolio"}</span></h2>
                <p class="section-subtitle">
                    {"Proyectos que demuestran nuestra capacidad para generar resultados excepcionales"}
                </p>
                <div class="filter-bar">
                    { for filter_buttons }
                </div>
                <div class="projects-grid">
                    { for filter_projects(&PROJECTS, *filter).into_iter().map(|project| html! {
                        <div class="card-dark project-card" key={project.title}>
                            <div class="project-icon">{project.icon}</div>
                            <h3>{project.title}</h3>
                            <p>{project.description}</p>
                            <div class="project-stats">
                                { for project.stats.iter().map(|(label, value)| html! {
                                    <div>
                                        <div class="project-stat-value">{*value}</div>
                                        <div class="project-stat-label">{*label}</div>
                                    </div>
                                }) }
                            </div>
                            <div class="project-tags">
                                { for project.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                            </div>
                        </div>
                    }) }
                </div>
                <div class="portfolio-cta">
                    <p>
                        {"Estos son solo algunos ejemplos. Cada proyecto es único y diseñado específicamente para las necesidades de nuestros clientes."}
                    </p>
                    <button
                        class="btn-primary"
                        onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact", NAV_HEIGHT_PX))}
                    >
                        {"Ver Tu Proyecto Aquí 🎯"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
    .portfolio-section {
        background: linear-gradient(180deg, #000 0%, #111827 50%, #000 100%);
    }
    .filter-bar {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin-bottom: 3rem;
    }
    .filter-button {
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-weight: 500;
        cursor: pointer;
        background: rgba(17, 24, 39, 0.5);
        color: #d1d5db;
        border: 1px solid #1f2937;
        transition: all 0.3s ease;
    }
    .filter-button:hover {
        border-color: rgba(0, 255, 156, 0.5);
    }
    .filter-button.active {
        background: #00ff9c;
        color: #000;
        box-shadow: 0 0 20px rgba(0, 255, 156, 0.5);
    }
    .projects-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .project-card {
        display: flex;
        flex-direction: column;
    }
    .project-icon {
        font-size: 3.75rem;
        text-align: center;
        margin-bottom: 1.5rem;
        transition: transform 0.3s ease;
    }
    .project-card:hover .project-icon {
        transform: scale(1.1);
    }
    .project-card p {
        color: #9ca3af;
        font-size: 0.875rem;
        flex-grow: 1;
    }
    .project-stats {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        text-align: center;
        padding: 1.5rem 0;
        margin-bottom: 1.5rem;
        border-bottom: 1px solid #1f2937;
    }
    .project-stat-value {
        color: #00ff9c;
        font-weight: 700;
    }
    .project-stat-label {
        color: #6b7280;
        font-size: 0.75rem;
        text-transform: capitalize;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .project-tags span {
        font-size: 0.75rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid #374151;
        color: #d1d5db;
    }
    .portfolio-cta {
        margin-top: 5rem;
        text-align: center;
        color: #9ca3af;
        font-size: 1.1rem;
    }
    @media (max-width: 1024px) {
        .projects-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .projects-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_keeps_every_project_in_order() {
        let shown = filter_projects(&PROJECTS, None);
        assert_eq!(shown.len(), PROJECTS.len());
        assert_eq!(shown[0].title, "E-Commerce Premium");
        assert_eq!(shown[5].title, "Landing Page");
    }

    #[test]
    fn category_filter_only_keeps_matching_projects() {
        let web: Vec<_> = filter_projects(&PROJECTS, Some(Category::Web))
            .iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(web, ["E-Commerce Premium", "SaaS Dashboard", "Landing Page"]);
        assert_eq!(filter_projects(&PROJECTS, Some(Category::Ai)).len(), 2);
        assert_eq!(filter_projects(&PROJECTS, Some(Category::Branding)).len(), 1);
    }

    #[test]
    fn every_filter_button_matches_something() {
        for (filter, _, _) in FILTERS {
            assert!(!filter_projects(&PROJECTS, filter).is_empty());
        }
    }
}
