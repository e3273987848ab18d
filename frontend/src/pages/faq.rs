use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Faq;

/// Single-open accordion: clicking the open item closes it, clicking any
/// other item opens that one instead.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", "glass", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub faqs: Vec<Faq>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.faqs.iter().enumerate().map(|(index, faq)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(next_open(*open, index)))
                };
                html! {
                    <FaqItem
                        key={faq.question.clone()}
                        question={faq.question.clone()}
                        answer={faq.answer.clone()}
                        is_open={*open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}
