use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::components::chat_widget::ChatWidget;
use crate::components::nav::Nav;
use crate::content::{Benefit, Contact, Feature, Footer, Hero, LandingContent, Plan, Testimonial};
use crate::pages::faq::FaqAccordion;
use crate::reveal::use_scroll_reveal;
use crate::sections::{scroll_to_section, Section};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<LandingContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let active_section = use_state(Section::default);

    // Every `.scroll-reveal` block below must be rendered by this component so
    // it exists when the observer takes its snapshot.
    use_scroll_reveal();

    let on_select = {
        let active_section = active_section.clone();
        Callback::from(move |section: Section| match scroll_to_section(section) {
            Ok(()) => active_section.set(section),
            Err(e) => log::warn!("Cannot scroll to {}: {}", section.id(), e),
        })
    };

    html! {
        <div class="landing-page">
            <AnimatedBackground />
            <Nav
                brand={content.brand.name.clone()}
                active={*active_section}
                {on_select}
            />

            { hero_section(&content.hero) }
            { benefits_section(&content.benefits) }
            { features_section(&content.features) }
            { pricing_section(&content.pricing) }
            { testimonials_section(&content.testimonials) }

            <section id={Section::Faq.id()} class="section">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2>{"Частые вопросы"}</h2>
                        <p>{"Всё, что нужно знать о платформе"}</p>
                    </div>
                    <FaqAccordion faqs={content.faqs.clone()} />
                </div>
            </section>

            { contact_section(&content.contact) }

            <ChatWidget chat={content.chat.clone()} />

            { footer(&content.brand.name, &content.brand.tagline, &content.footer) }
        </div>
    }
}

fn hero_section(hero: &Hero) -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="container hero-content animate-fade-in">
                <span class="badge glass">{ &hero.badge }</span>
                <h1>
                    <span class="gradient-text">{ &hero.title_accent }</span>
                    <br />
                    <span class="muted-gradient-text">{ &hero.title_rest }</span>
                </h1>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <div class="hero-cta-group">
                    <button class="btn btn-primary btn-lg glow">{"🚀 "}{ &hero.primary_cta }</button>
                    <button class="btn btn-outline btn-lg glass">{"▶ "}{ &hero.secondary_cta }</button>
                </div>
            </div>
        </section>
    }
}

fn benefits_section(benefits: &[Benefit]) -> Html {
    html! {
        <section id={Section::Benefits.id()} class="section">
            <div class="container">
                <div class="benefits-grid scroll-reveal">
                    { for benefits.iter().map(|benefit| html! {
                        <div class="card glass benefit-card">
                            <h3>{ &benefit.title }</h3>
                            <p>{ &benefit.subtitle }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn features_section(features: &[Feature]) -> Html {
    html! {
        <section id={Section::Features.id()} class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Всё для вашей работы"}</h2>
                    <p>{"Мощные инструменты для эффективного сотрудничества"}</p>
                </div>
                <div class="features-grid">
                    { for features.iter().map(|feature| html! {
                        <div class="card glass feature-card scroll-reveal">
                            <div class="feature-icon">{ &feature.icon }</div>
                            <h3>{ &feature.title }</h3>
                            <p>{ &feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn pricing_section(plans: &[Plan]) -> Html {
    html! {
        <section id={Section::Pricing.id()} class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Выберите свой тариф"}</h2>
                    <p>{"Гибкие планы для любых задач"}</p>
                </div>
                <div class="pricing-grid">
                    { for plans.iter().map(plan_card) }
                </div>
            </div>
        </section>
    }
}

fn plan_card(plan: &Plan) -> Html {
    html! {
        <div class={classes!("card", "glass", "plan-card", "scroll-reveal", plan.popular.then(|| "popular glow"))}>
            if plan.popular {
                <span class="plan-badge">{"Популярный"}</span>
            }
            <h3>{ &plan.name }</h3>
            <div class="plan-price">
                <span class="amount">{ &plan.price }</span>
                <span class="currency">{"₽"}</span>
            </div>
            <p class="plan-period">{ &plan.period }</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{ feature }</li>
                }) }
            </ul>
            <button class={if plan.popular { "btn btn-primary btn-block" } else { "btn btn-outline btn-block glass" }}>
                {"Выбрать план"}
            </button>
        </div>
    }
}

fn testimonials_section(testimonials: &[Testimonial]) -> Html {
    html! {
        <section id={Section::Testimonials.id()} class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Что говорят пользователи"}</h2>
                    <p>{"Отзывы специалистов, которые работают с нами"}</p>
                </div>
                <div class="testimonials-grid">
                    { for testimonials.iter().map(|testimonial| html! {
                        <div class="card glass testimonial-card scroll-reveal">
                            <div class="stars">{ ("★".repeat(testimonial.stars())) }</div>
                            <p class="quote">{ format!("\"{}\"", testimonial.text) }</p>
                            <div>
                                <p class="author">{ &testimonial.name }</p>
                                <p class="role">{ &testimonial.role }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_section(contact: &Contact) -> Html {
    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="container narrow">
                <div class="card glass contact-card">
                    <h2>{ &contact.heading }</h2>
                    <p>{ &contact.text }</p>
                    <div class="hero-cta-group">
                        <button class="btn btn-primary btn-lg glow">{ &contact.primary_cta }</button>
                        <button class="btn btn-outline btn-lg glass">{ &contact.secondary_cta }</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn footer(brand: &str, tagline: &str, footer: &Footer) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="logo-mark">{"💼"}</span>
                            <span>{ brand }</span>
                        </div>
                        <p class="footer-tagline">{ tagline }</p>
                    </div>
                    { for footer.columns.iter().map(|column| html! {
                        <div>
                            <h4>{ &column.title }</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li><a href={link.href.clone()}>{ &link.label }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{ &footer.copyright }</p>
                </div>
            </div>
        </footer>
    }
}
