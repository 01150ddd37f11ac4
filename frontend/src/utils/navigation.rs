/// Height of the fixed navbar; section jumps land just below it.
pub const NAV_HEIGHT_PX: f64 = 80.0;

/// Sections reachable from the navbar, in page order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("services", "Servicios"),
    ("about", "Nosotros"),
    ("process", "Proceso"),
    ("portfolio", "Portfolio"),
];

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll offset that puts a section's top edge right under the navbar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Section under the bottom edge of the navbar, if any.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], scroll_y: f64, nav_height: f64) -> Option<&'a str> {
    let probe = scroll_y + nav_height;
    sections
        .iter()
        .filter(|s| probe >= s.top && probe < s.top + s.height)
        .last()
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds<'static>> {
        vec![
            SectionBounds { id: "services", top: 1000.0, height: 800.0 },
            SectionBounds { id: "about", top: 1800.0, height: 600.0 },
            SectionBounds { id: "process", top: 2400.0, height: 900.0 },
        ]
    }

    #[test]
    fn navbar_turns_solid_after_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
    }

    #[test]
    fn target_accounts_for_navbar() {
        assert_eq!(scroll_target(1000.0, 80.0), 920.0);
        assert_eq!(scroll_target(30.0, 80.0), 0.0);
    }

    #[test]
    fn active_section_uses_navbar_edge() {
        let sections = layout();
        assert_eq!(active_section(&sections, 0.0, 80.0), None);
        assert_eq!(active_section(&sections, 920.0, 80.0), Some("services"));
        assert_eq!(active_section(&sections, 1719.0, 80.0), Some("services"));
        assert_eq!(active_section(&sections, 1720.0, 80.0), Some("about"));
        assert_eq!(active_section(&sections, 3300.0, 80.0), None);
    }
}
