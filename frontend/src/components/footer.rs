use crate::config::{CONTACT_EMAIL, LOCATION, SITE_NAME, WHATSAPP_DISPLAY, WHATSAPP_URL};
use crate::utils::dom::{scroll_to_section, scroll_to_top};
use crate::utils::navigation::NAV_HEIGHT_PX;
use web_sys::js_sys;
use yew::prelude::*;

const SERVICE_LINKS: [(&str, &str); 4] = [
    ("Automatización con IA", "services"),
    ("Desarrollo Web", "services"),
    ("Branding Estratégico", "services"),
    ("Consultoría", "contact"),
];

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("Sobre Nosotros", "about"),
    ("Nuestro Proceso", "process"),
    ("Portfolio", "portfolio"),
    ("Testimonios", "testimonials"),
];

const LEGAL_LINKS: [&str; 3] = ["Política de Privacidad", "Términos de Servicio", "Cookies"];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "💼"),
    ("Twitter", "🐦"),
    ("Instagram", "📸"),
    ("GitHub", "💻"),
];

fn section_links(title: &str, links: &[(&'static str, &'static str)]) -> Html {
    html! {
        <div class="footer-column">
            <h3>{title}</h3>
            <ul>
                { for links.iter().map(|&(name, id)| html! {
                    <li>
                        <button onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id, NAV_HEIGHT_PX))}>
                            {name}
                        </button>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <button class="footer-logo" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                            {SITE_NAME}
                        </button>
                        <p>
                            {"Transformamos negocios con soluciones tecnológicas de vanguardia. Automatización con IA, desarrollo web y branding estratégico para llevar tu empresa al siguiente nivel."}
                        </p>
                        <div class="footer-contact">
                            <div><span>{"📧"}</span><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></div>
                            <div><span>{"📱"}</span><a href={WHATSAPP_URL}>{WHATSAPP_DISPLAY}</a></div>
                            <div><span>{"📍"}</span>{LOCATION}</div>
                        </div>
                    </div>
                    { section_links("Servicios", &SERVICE_LINKS) }
                    { section_links("Empresa", &COMPANY_LINKS) }
                    <div class="footer-column">
                        <h3>{"Legal"}</h3>
                        <ul>
                            { for LEGAL_LINKS.iter().map(|name| html! { <li><a href="#">{*name}</a></li> }) }
                        </ul>
                    </div>
                </div>
                <div class="footer-social">
                    <span>{"Síguenos en redes sociales 🚀"}</span>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                            <a href="#" target="_blank" rel="noopener noreferrer" aria-label={*name}>{*icon}</a>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    {format!("© {} {}. Todos los derechos reservados.", year, SITE_NAME)}
                </div>
            </div>
            <style>
                {r#"
    .site-footer {
        background: #000;
        border-top: 1px solid #1f2937;
    }
    .footer-inner {
        max-width: 1280px;
        margin: 0 auto;
        padding: 4rem 2rem 2rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 1fr;
        gap: 3rem;
        margin-bottom: 3rem;
    }
    .footer-logo {
        background: none;
        border: none;
        cursor: pointer;
        font-family: 'Orbitron', sans-serif;
        font-size: 1.5rem;
        font-weight: 700;
        color: #00ff9c;
        padding: 0;
        transition: transform 0.3s ease;
    }
    .footer-logo:hover {
        transform: scale(1.05);
    }
    .footer-brand p {
        color: #9ca3af;
        line-height: 1.6;
        max-width: 28rem;
    }
    .footer-contact div {
        display: flex;
        gap: 0.75rem;
        color: #9ca3af;
        margin-bottom: 0.75rem;
    }
    .footer-contact a, .footer-column a {
        color: #9ca3af;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-column h3 {
        font-size: 1.1rem;
        margin: 0 0 1.5rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .footer-column li {
        margin-bottom: 0.75rem;
    }
    .footer-column button {
        background: none;
        border: none;
        padding: 0;
        cursor: pointer;
        color: #9ca3af;
        font-size: 0.875rem;
        transition: color 0.3s ease;
    }
    .footer-column a {
        font-size: 0.875rem;
    }
    .footer-contact a:hover, .footer-column a:hover, .footer-column button:hover {
        color: #00ff9c;
    }
    .footer-social {
        border-top: 1px solid #1f2937;
        padding-top: 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-links a {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        text-decoration: none;
        border-radius: 0.5rem;
        border: 1px solid #1f2937;
        background: rgba(17, 24, 39, 0.5);
        transition: all 0.3s ease;
    }
    .social-links a:hover {
        border-color: #00ff9c;
        transform: scale(1.1);
    }
    .footer-bottom {
        margin-top: 2rem;
        text-align: center;
        color: #6b7280;
        font-size: 0.875rem;
    }
    @media (max-width: 1024px) {
        .footer-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
        .footer-social {
            flex-direction: column;
            gap: 1.5rem;
        }
    }
                "#}
            </style>
        </footer>
    }
}
