use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::error::{self, Error, Result};

/// In-page anchors, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Benefits,
    Features,
    Pricing,
    Testimonials,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Benefits,
        Section::Features,
        Section::Pricing,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Benefits => "benefits",
            Section::Features => "features",
            Section::Pricing => "pricing",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Benefits => "Преимущества",
            Section::Features => "Функционал",
            Section::Pricing => "Тарифы",
            Section::Testimonials => "Отзывы",
            Section::Faq => "FAQ",
            Section::Contact => "Контакты",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smoothly scrolls the section into view. Fails without side effects when the
/// section is not in the document.
pub fn scroll_to_section(section: Section) -> Result<()> {
    let element = error::document()?
        .get_element_by_id(section.id())
        .ok_or_else(|| Error::MissingElement(section.id().to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_active_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::ALL[0], Section::default());
    }

    #[test]
    fn ids_are_distinct() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn sections_are_in_page_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["home", "benefits", "features", "pricing", "testimonials", "faq", "contact"]
        );
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn href_points_at_anchor() {
        assert_eq!(Section::Pricing.href(), "#pricing");
        assert_eq!(Section::Faq.label(), "FAQ");
    }
}
