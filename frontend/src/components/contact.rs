use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{CONTACT_EMAIL, LOCATION, OFFICE_HOURS, WHATSAPP_DISPLAY, WHATSAPP_URL};
use crate::utils::clipboard::copy_text;
use crate::utils::contact::{hand_off, BrowserMailClient, ContactForm, OutgoingMessage, Service};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const STATUS_VISIBLE_MS: u32 = 5_000;

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Invalid(String),
    Opened { copied: bool },
    NoMailClient,
}

/// Shows `status`, then clears it after a few seconds unless a newer one replaced it.
fn show_status(status: &UseStateHandle<Status>, generation: &Rc<RefCell<u32>>, next: Status) {
    let id = {
        let mut generation = generation.borrow_mut();
        *generation = generation.wrapping_add(1);
        *generation
    };
    status.set(next);
    let status = status.clone();
    let generation = generation.clone();
    spawn_local(async move {
        TimeoutFuture::new(STATUS_VISIBLE_MS).await;
        if *generation.borrow() == id {
            status.set(Status::Idle);
        }
    });
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state_eq(|| Status::Idle);
    let generation = use_mut_ref(|| 0u32);

    let text_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.service = Service::from_value(&select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = match OutgoingMessage::prepare(&form, CONTACT_EMAIL) {
                Ok(message) => message,
                Err(e) => {
                    show_status(&status, &generation, Status::Invalid(e.to_string()));
                    return;
                }
            };
            let form = form.clone();
            let status = status.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let copied = copy_text(&message.body).await;
                let handoff = hand_off(&message, copied, &BrowserMailClient);
                if handoff.opened {
                    log::info!("Opened mail client for {}", CONTACT_EMAIL);
                    form.set(ContactForm::default());
                    show_status(
                        &status,
                        &generation,
                        Status::Opened {
                            copied: handoff.copied,
                        },
                    );
                } else {
                    show_status(&status, &generation, Status::NoMailClient);
                }
            });
        })
    };

    let status_html = match &*status {
        Status::Idle => html! {},
        Status::Invalid(message) => html! {
            <div class="form-status error">{format!("⚠️ {}", message)}</div>
        },
        Status::NoMailClient => html! {
            <div class="form-status error">
                {format!("⚠️ No pudimos abrir tu cliente de correo. Escríbenos a {}.", CONTACT_EMAIL)}
            </div>
        },
        Status::Opened { copied } => html! {
            <div class="form-status success">
                {"✅ Abrimos tu cliente de correo con el mensaje listo."}
                { if *copied { " También lo copiamos al portapapeles por si prefieres pegarlo." } else { "" } }
            </div>
        },
    };

    let selected = form.service.map(Service::value).unwrap_or_default();
    let contact_info: [(&str, &str, &str, Option<String>); 4] = [
        ("📧", "Email", CONTACT_EMAIL, Some(format!("mailto:{}", CONTACT_EMAIL))),
        ("📱", "WhatsApp", WHATSAPP_DISPLAY, Some(WHATSAPP_URL.to_string())),
        ("📍", "Ubicación", LOCATION, None),
        ("⏰", "Horario", OFFICE_HOURS, None),
    ];

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <h2 class="section-title">{"Hablemos de Tu "}<span class="gradient-text">{"Proyecto"}</span></h2>
                <p class="section-subtitle">
                    {"Estamos listos para transformar tus ideas en realidad. Contáctanos hoy mismo."}
                </p>
                <div class="contact-grid">
                    <div class="card-dark">
                        <h3>{"Envíanos un Mensaje 💬"}</h3>
                        <form class="contact-form" {onsubmit} novalidate=true>
                            <label for="name">{"Nombre Completo *"}</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Tu nombre"
                                value={form.name.clone()}
                                oninput={text_input(|f, v| f.name = v)}
                            />
                            <label for="email">{"Email *"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="tu@email.com"
                                value={form.email.clone()}
                                oninput={text_input(|f, v| f.email = v)}
                            />
                            <label for="company">{"Empresa"}</label>
                            <input
                                type="text"
                                id="company"
                                placeholder="Nombre de tu empresa"
                                value={form.company.clone()}
                                oninput={text_input(|f, v| f.company = v)}
                            />
                            <label for="phone">{"Teléfono"}</label>
                            <input
                                type="tel"
                                id="phone"
                                placeholder={WHATSAPP_DISPLAY}
                                value={form.phone.clone()}
                                oninput={text_input(|f, v| f.phone = v)}
                            />
                            <label for="service">{"Servicio de Interés *"}</label>
                            <select id="service" onchange={on_service}>
                                <option value="" selected={selected.is_empty()}>{"Selecciona un servicio"}</option>
                                { for Service::ALL.iter().map(|service| html! {
                                    <option value={service.value()} selected={selected == service.value()}>
                                        {service.label()}
                                    </option>
                                }) }
                            </select>
                            <label for="message">{"Mensaje *"}</label>
                            <textarea
                                id="message"
                                rows="5"
                                placeholder="Cuéntanos sobre tu proyecto..."
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                            <button type="submit" class="btn-primary">{"Enviar Mensaje 🚀"}</button>
                            { status_html }
                        </form>
                    </div>
                    <div class="contact-info">
                        { for contact_info.into_iter().map(|(icon, title, value, link)| html! {
                            <div class="card-dark info-card">
                                <span class="info-icon">{icon}</span>
                                <div>
                                    <div class="info-title">{title}</div>
                                    {
                                        match link {
                                            Some(href) => html! { <a href={href} target="_blank" rel="noopener noreferrer">{value}</a> },
                                            None => html! { <span>{value}</span> },
                                        }
                                    }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .contact-section {
        background: linear-gradient(180deg, #000 0%, #111827 50%, #000 100%);
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .contact-grid h3 {
        font-size: 1.5rem;
        margin: 0 0 1.5rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .contact-form label {
        color: #d1d5db;
        font-size: 0.875rem;
        font-weight: 500;
        margin-top: 0.75rem;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        background: rgba(17, 24, 39, 0.5);
        border: 1px solid #374151;
        border-radius: 0.5rem;
        color: #fff;
        font: inherit;
        transition: border-color 0.3s ease;
    }
    .contact-form input:focus,
    .contact-form select:focus,
    .contact-form textarea:focus {
        outline: none;
        border-color: #00ff9c;
    }
    .contact-form textarea {
        resize: none;
    }
    .contact-form .btn-primary {
        margin-top: 1.5rem;
    }
    .form-status {
        margin-top: 1rem;
        padding: 1rem;
        border-radius: 0.5rem;
        text-align: center;
    }
    .form-status.success {
        background: rgba(0, 255, 156, 0.1);
        border: 1px solid rgba(0, 255, 156, 0.3);
        color: #00ff9c;
    }
    .form-status.error {
        background: rgba(239, 68, 68, 0.1);
        border: 1px solid rgba(239, 68, 68, 0.3);
        color: #f87171;
    }
    .contact-info {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .info-card {
        display: flex;
        align-items: center;
        gap: 1.25rem;
    }
    .info-icon {
        font-size: 2rem;
    }
    .info-title {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .info-card a, .info-card span {
        color: #fff;
        font-size: 1.1rem;
        text-decoration: none;
    }
    .info-card a:hover {
        color: #00ff9c;
    }
    @media (max-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
