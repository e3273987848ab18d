use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, active, on_select } = props;
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let section_button = |section: Section, close_menu: bool| {
        let on_select = on_select.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(section);
            if close_menu && *menu_open {
                menu_open.toggle();
            }
        });
        html! {
            <button
                key={section.id()}
                class={classes!("nav-link", (*active == section).then(|| "active"))}
                {onclick}
            >
                { section.label() }
            </button>
        }
    };

    let sheet_class = if *menu_open {
        "nav-sheet open"
    } else {
        "nav-sheet"
    };

    html! {
        <nav class="top-nav glass">
            <div class="nav-content">
                <a href={Section::Home.href()} class="nav-logo">
                    <span class="logo-mark glow">{"💼"}</span>
                    <span class="logo-text">{ brand }</span>
                </a>

                <div class="nav-links">
                    { for Section::ALL.into_iter().map(|section| section_button(section, false)) }
                </div>

                <div class="nav-actions">
                    <button class="nav-login">{"Войти"}</button>
                    <button class="nav-cta glow">{"Начать"}</button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <div class={sheet_class}>
                { for Section::ALL.into_iter().map(|section| section_button(section, true)) }
            </div>
        </nav>
    }
}
