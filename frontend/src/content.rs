use serde::Deserialize;

use crate::chat::SeedMessage;
use crate::error::Result;

const LANDING_JSON: &str = include_str!("../content/landing.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LandingContent {
    pub brand: Brand,
    pub hero: Hero,
    pub benefits: Vec<Benefit>,
    pub features: Vec<Feature>,
    pub pricing: Vec<Plan>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub contact: Contact,
    pub footer: Footer,
    pub chat: ChatContent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title_accent: String,
    pub title_rest: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub text: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatContent {
    pub agent_name: String,
    pub presence: String,
    pub placeholder: String,
    pub seed: Vec<SeedMessage>,
}

impl Testimonial {
    /// Star count, capped at five.
    pub fn stars(&self) -> usize {
        self.rating.min(5) as usize
    }
}

impl ChatContent {
    pub fn agent_initial(&self) -> String {
        self.agent_name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub fn load() -> Result<LandingContent> {
    parse(LANDING_JSON)
}

pub fn parse(json: &str) -> Result<LandingContent> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::error::Error;

    #[test]
    fn embedded_content_parses() {
        let content = load().unwrap();
        assert_eq!(content.brand.name, "Корвикс");
        assert_eq!(content.benefits.len(), 4);
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.footer.columns.len(), 3);
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        let content = load().unwrap();
        assert_eq!(content.pricing.len(), 3);
        let popular: Vec<&str> = content
            .pricing
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name.as_str())
            .collect();
        assert_eq!(popular, ["Про"]);
    }

    #[test]
    fn testimonial_ratings_fit_the_scale() {
        let content = load().unwrap();
        assert!(content
            .testimonials
            .iter()
            .all(|t| (1..=5).contains(&t.rating)));

        let mut loud = content.testimonials[0].clone();
        loud.rating = 9;
        assert_eq!(loud.stars(), 5);
    }

    #[test]
    fn zero_rating_shows_no_stars() {
        let mut unrated = load().unwrap().testimonials[0].clone();
        unrated.rating = 0;
        assert_eq!(unrated.stars(), 0);
        unrated.rating = 3;
        assert_eq!(unrated.stars(), 3);
    }

    #[test]
    fn chat_has_two_seed_messages() {
        let chat = load().unwrap().chat;
        assert_eq!(chat.seed.len(), 2);
        assert_eq!(chat.seed[0].sender, Sender::Agent);
        assert_eq!(chat.seed[1].sender, Sender::Visitor);
        assert_eq!(chat.agent_initial(), "А");
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = parse(r#"{"brand": {"name": "x"}}"#).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }
}
