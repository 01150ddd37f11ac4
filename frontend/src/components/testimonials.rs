use std::rc::Rc;

use crate::utils::animation::{next_index, prev_index, TESTIMONIAL_ROTATE_MS};
use gloo_timers::callback::Interval;
use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    text: &'static str,
    rating: usize,
    avatar: &'static str,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "María González",
        role: "CEO, TechStart",
        company: "Startup Tecnológica",
        text: "Arcano Intelligence transformó completamente nuestros procesos. La automatización con IA redujo nuestros costos operativos en un 60% y mejoró la satisfacción del cliente significativamente.",
        rating: 5,
        avatar: "👩‍💼",
    },
    Testimonial {
        name: "Carlos Rodríguez",
        role: "Director Marketing",
        company: "E-Commerce Global",
        text: "El sitio web que desarrollaron superó todas nuestras expectativas. Las conversiones aumentaron un 200% en el primer mes. Su equipo es profesional, creativo y siempre disponible.",
        rating: 5,
        avatar: "👨‍💼",
    },
    Testimonial {
        name: "Ana Martínez",
        role: "Fundadora",
        company: "Brand Studio",
        text: "La identidad de marca que crearon para nosotros es espectacular. Capturaron perfectamente nuestra visión y la llevaron al siguiente nivel. Ahora destacamos en el mercado.",
        rating: 5,
        avatar: "👩‍🎨",
    },
    Testimonial {
        name: "Roberto Silva",
        role: "CTO",
        company: "FinTech Solutions",
        text: "Implementaron un chatbot con IA que maneja el 85% de nuestras consultas automáticamente. La calidad técnica y el soporte post-lanzamiento son excepcionales.",
        rating: 5,
        avatar: "👨‍💻",
    },
    Testimonial {
        name: "Laura Pérez",
        role: "Gerente General",
        company: "Retail Plus",
        text: "Profesionales de primer nivel. Nos ayudaron a digitalizar todo nuestro negocio y ahora competimos con empresas mucho más grandes. Totalmente recomendados.",
        rating: 5,
        avatar: "👩‍💼",
    },
];

const TRUST_BADGES: [(&str, &str, &str); 4] = [
    ("⭐", "4.9/5", "Calificación Promedio"),
    ("💯", "100%", "Satisfacción Cliente"),
    ("🚀", "50+", "Proyectos Exitosos"),
    ("🏆", "98%", "Tasa de Retención"),
];

pub enum CarouselAction {
    Next,
    Prev,
    Select(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub active: usize,
    pub len: usize,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let active = match action {
            CarouselAction::Next => next_index(self.active, self.len),
            CarouselAction::Prev => prev_index(self.active, self.len),
            CarouselAction::Select(index) if index < self.len => index,
            CarouselAction::Select(_) => return self,
        };
        if active == self.active {
            return self;
        }
        Rc::new(Self { active, ..*self })
    }
}

/// Up to `count` indices other than `active`, in list order.
fn others(active: usize, len: usize, count: usize) -> Vec<usize> {
    (0..len).filter(|&i| i != active).take(count).collect()
}

fn stars(rating: usize) -> Html {
    html! {
        <div class="stars">
            { for (0..rating).map(|_| html! { <span>{"★"}</span> }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel {
        active: 0,
        len: TESTIMONIALS.len(),
    });

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TESTIMONIAL_ROTATE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Next)
                });
                move || drop(interval)
            },
            (),
        );
    }

    let select = |index: usize| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(index)))
    };

    let current = &TESTIMONIALS[carousel.active];

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-inner">
                <h2 class="section-title">
                    {"Lo Que Dicen "}<span class="gradient-text">{"Nuestros Clientes"}</span>
                </h2>
                <p class="section-subtitle">
                    {"La satisfacción de nuestros clientes es nuestra mejor carta de presentación"}
                </p>

                <div class="card-dark testimonial-main">
                    <div class="quote-mark">{"\""}</div>
                    <div class="testimonial-avatar">{current.avatar}</div>
                    { stars(current.rating) }
                    <p class="testimonial-text">{current.text}</p>
                    <div class="testimonial-name">{current.name}</div>
                    <div class="testimonial-role">{current.role}</div>
                    <div class="testimonial-company">{current.company}</div>
                </div>

                <div class="testimonial-dots">
                    { for (0..TESTIMONIALS.len()).map(|index| html! {
                        <button
                            class={classes!("dot", (index == carousel.active).then_some("active"))}
                            aria-label={format!("Ir al testimonio {}", index + 1)}
                            onclick={select(index)}
                        />
                    }) }
                </div>

                <div class="testimonial-others">
                    { for others(carousel.active, TESTIMONIALS.len(), 3).into_iter().map(|index| {
                        let testimonial = &TESTIMONIALS[index];
                        html! {
                            <div class="card-dark testimonial-mini" key={index} onclick={select(index)}>
                                <div class="mini-avatar">{testimonial.avatar}</div>
                                { stars(testimonial.rating) }
                                <p>{format!("\"{}\"", testimonial.text)}</p>
                                <div class="testimonial-name">{testimonial.name}</div>
                                <div class="testimonial-company">{testimonial.company}</div>
                            </div>
                        }
                    }) }
                </div>

                <div class="trust-badges">
                    { for TRUST_BADGES.iter().map(|(icon, value, label)| html! {
                        <div class="trust-badge">
                            <div class="trust-icon">{*icon}</div>
                            <div class="trust-value">{*value}</div>
                            <div class="trust-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .testimonials-section {
        background: #000;
    }
    .testimonial-main {
        max-width: 56rem;
        margin: 0 auto 3rem;
        text-align: center;
    }
    .quote-mark {
        font-size: 3.75rem;
        color: rgba(0, 255, 156, 0.2);
    }
    .testimonial-avatar {
        font-size: 3.75rem;
        margin-bottom: 1.5rem;
    }
    .stars {
        display: flex;
        justify-content: center;
        gap: 0.25rem;
        color: #00ff9c;
        font-size: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .testimonial-text {
        font-size: 1.25rem;
        color: #d1d5db;
        line-height: 1.7;
        font-style: italic;
        margin-bottom: 2rem;
    }
    .testimonial-name {
        font-weight: 700;
        color: #fff;
    }
    .testimonial-role {
        color: #00ff9c;
        font-weight: 500;
    }
    .testimonial-company {
        color: #6b7280;
        font-size: 0.875rem;
    }
    .testimonial-dots {
        display: flex;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 3rem;
    }
    .dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 9999px;
        border: none;
        background: #374151;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .dot:hover {
        background: #4b5563;
    }
    .dot.active {
        width: 2rem;
        background: #00ff9c;
    }
    .testimonial-others {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-top: 4rem;
    }
    .testimonial-mini {
        text-align: center;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .testimonial-mini:hover {
        transform: scale(1.05);
    }
    .mini-avatar {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .testimonial-mini .stars {
        font-size: 1rem;
        margin-bottom: 0.75rem;
    }
    .testimonial-mini p {
        color: #9ca3af;
        font-size: 0.875rem;
        font-style: italic;
        display: -webkit-box;
        -webkit-line-clamp: 3;
        -webkit-box-orient: vertical;
        overflow: hidden;
    }
    .trust-badges {
        margin: 5rem auto 0;
        max-width: 56rem;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        text-align: center;
    }
    .trust-icon {
        font-size: 1.9rem;
    }
    .trust-value {
        font-size: 1.5rem;
        font-weight: 700;
        color: #00ff9c;
    }
    .trust-label {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    @media (max-width: 1024px) {
        .testimonial-others {
            display: none;
        }
    }
    @media (max-width: 768px) {
        .trust-badges {
            grid-template-columns: repeat(2, 1fr);
        }
    }
                "#}
            </style>
        </section>
    }
}
