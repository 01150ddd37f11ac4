//! Turns the contact form into a message for the visitor's mail client.
//!
//! Nothing is sent from the page. Submitting composes a subject and plain-text
//! body, and opens a `mailto:` link. Delivery is up to the mail client.

use super::clipboard::ClipboardError;

const NOT_GIVEN: &str = "No indicado";
const GENERAL_ENQUIRY: &str = "Consulta general";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Falta el campo obligatorio: {0}")]
    MissingField(&'static str),
    #[error("El email no es válido")]
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Ai,
    Web,
    Branding,
    Consulting,
    All,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Ai,
        Service::Web,
        Service::Branding,
        Service::Consulting,
        Service::All,
    ];

    /// Value used in the `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            Service::Ai => "ia",
            Service::Web => "web",
            Service::Branding => "branding",
            Service::Consulting => "consultoria",
            Service::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Ai => "Automatización con IA",
            Service::Web => "Desarrollo Web",
            Service::Branding => "Branding Estratégico",
            Service::Consulting => "Consultoría Tecnológica",
            Service::All => "Todos los servicios",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: Option<Service>,
    pub message: String,
}

fn or_not_given(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        NOT_GIVEN
    } else {
        value
    }
}

/// Loose shape check: something@something.tld, no whitespace.
pub fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("nombre"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.service.is_none() {
            return Err(ContactError::MissingField("servicio"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("mensaje"));
        }
        Ok(())
    }

    fn service_label(&self) -> &'static str {
        self.service.map(Service::label).unwrap_or(GENERAL_ENQUIRY)
    }

    pub fn subject(&self) -> String {
        format!("Nuevo contacto - {}", self.service_label())
    }

    pub fn body(&self) -> String {
        let message = self.message.trim();
        [
            "Nuevo mensaje desde ArcanoWeb:".to_string(),
            format!("Nombre: {}", or_not_given(&self.name)),
            format!("Email: {}", or_not_given(&self.email)),
            format!("Empresa: {}", or_not_given(&self.company)),
            format!("Teléfono: {}", or_not_given(&self.phone)),
            format!("Servicio de interés: {}", self.service_label()),
            String::new(),
            "Mensaje:".to_string(),
            (if message.is_empty() { "—" } else { message }).to_string(),
        ]
        .join("\n")
    }

    pub fn mailto_uri(&self, address: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

/// A validated form, ready to hand over.
#[derive(Clone, Debug, PartialEq)]
pub struct OutgoingMessage {
    pub body: String,
    pub mailto: String,
}

impl OutgoingMessage {
    pub fn prepare(form: &ContactForm, address: &str) -> Result<Self, ContactError> {
        form.validate()?;
        Ok(Self {
            body: form.body(),
            mailto: form.mailto_uri(address),
        })
    }
}

/// Where a composed message goes. Opening it is all the page can do; whether
/// the visitor sends it is up to their mail client.
#[cfg_attr(test, mockall::automock)]
pub trait MailClient {
    fn open(&self, mailto: &str) -> Result<(), String>;
}

/// Navigates the window to the `mailto:` link.
pub struct BrowserMailClient;

impl MailClient for BrowserMailClient {
    fn open(&self, mailto: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        window
            .location()
            .set_href(mailto)
            .map_err(|e| format!("{:?}", e))
    }
}

/// How far a message got. Neither field means it was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub copied: bool,
    pub opened: bool,
}

/// Second half of a submit, after the clipboard attempt. A failed copy is
/// logged and otherwise ignored.
pub fn hand_off<C: MailClient + ?Sized>(
    message: &OutgoingMessage,
    copied: Result<(), ClipboardError>,
    client: &C,
) -> Handoff {
    if let Err(e) = &copied {
        log::warn!("Could not copy contact message: {}", e);
    }
    let opened = match client.open(&message.mailto) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to open mail client: {}", e);
            false
        }
    };
    Handoff {
        copied: copied.is_ok(),
        opened,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "María González".into(),
            email: "maria@techstart.io".into(),
            company: String::new(),
            phone: "+1 787 555 0100".into(),
            service: Some(Service::Web),
            message: "Necesitamos una tienda online.".into(),
        }
    }

    #[test]
    fn service_values_round_trip() {
        for service in Service::ALL {
            assert_eq!(Service::from_value(service.value()), Some(service));
        }
        assert_eq!(Service::from_value(""), None);
        assert_eq!(Service::from_value("seo"), None);
    }

    #[test]
    fn body_marks_blank_fields() {
        let body = filled().body();
        assert_eq!(
            body,
            "Nuevo mensaje desde ArcanoWeb:\n\
             Nombre: María González\n\
             Email: maria@techstart.io\n\
             Empresa: No indicado\n\
             Teléfono: +1 787 555 0100\n\
             Servicio de interés: Desarrollo Web\n\
             \n\
             Mensaje:\n\
             Necesitamos una tienda online."
        );
    }

    #[test]
    fn subject_falls_back_to_general_enquiry() {
        let mut form = filled();
        assert_eq!(form.subject(), "Nuevo contacto - Desarrollo Web");
        form.service = None;
        assert_eq!(form.subject(), "Nuevo contacto - Consulta general");
        form.message.clear();
        assert!(form.body().ends_with("Mensaje:\n—"));
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let uri = filled().mailto_uri("info@arcanointelligence.com");
        assert!(uri.starts_with(
            "mailto:info@arcanointelligence.com?subject=Nuevo%20contacto%20-%20Desarrollo%20Web&body="
        ));
        assert!(uri.contains("%0AEmpresa%3A%20No%20indicado%0A"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn validation_requires_core_fields() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("nombre")));

        let mut form = filled();
        form.email = "maria-at-techstart".into();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

        let mut form = filled();
        form.service = None;
        assert_eq!(form.validate(), Err(ContactError::MissingField("servicio")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("mensaje")));
    }

    #[test]
    fn invalid_form_is_never_prepared() {
        let mut form = filled();
        form.email.clear();
        assert_eq!(
            OutgoingMessage::prepare(&form, "info@arcanointelligence.com"),
            Err(ContactError::MissingField("email"))
        );
    }

    #[test]
    fn copy_failure_still_opens_mail_client() {
        let message = OutgoingMessage::prepare(&filled(), "info@arcanointelligence.com").unwrap();
        let expected = message.mailto.clone();
        let mut client = MockMailClient::new();
        client
            .expect_open()
            .withf(move |uri| uri == expected)
            .times(1)
            .returning(|_| Ok(()));

        let handoff = hand_off(&message, Err(ClipboardError::LegacyCopyFailed), &client);
        assert_eq!(
            handoff,
            Handoff {
                copied: false,
                opened: true
            }
        );
    }

    #[test]
    fn opened_is_the_best_outcome_there_is() {
        let message = OutgoingMessage::prepare(&filled(), "info@arcanointelligence.com").unwrap();
        let mut client = MockMailClient::new();
        client.expect_open().times(1).returning(|_| Ok(()));
        assert_eq!(
            hand_off(&message, Ok(()), &client),
            Handoff {
                copied: true,
                opened: true
            }
        );
    }

    #[test]
    fn blocked_navigation_is_reported_not_raised() {
        let message = OutgoingMessage::prepare(&filled(), "info@arcanointelligence.com").unwrap();
        let mut client = MockMailClient::new();
        client
            .expect_open()
            .times(1)
            .returning(|_| Err("SecurityError".to_string()));
        let handoff = hand_off(&message, Err(ClipboardError::Unavailable), &client);
        assert!(!handoff.copied);
        assert!(!handoff.opened);
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email(" a.b@sub.domain.org "));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@.com"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }
}
