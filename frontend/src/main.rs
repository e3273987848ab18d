use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod chat;
mod config;
mod content;
mod error;
mod reveal;
mod sections;

mod components {
    pub mod animated_background;
    pub mod chat_widget;
    pub mod nav;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod not_found;
}

use content::LandingContent;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, content: Option<Rc<LandingContent>>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            match content {
                Some(content) => html! { <Landing {content} /> },
                None => html! {
                    <div class="content-error">
                        <p>{"Не удалось загрузить страницу. Попробуйте обновить её позже."}</p>
                    </div>
                },
            }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(
        |_| match content::load() {
            Ok(content) => Some(Rc::new(content)),
            Err(e) => {
                error!("Failed to load landing content: {}", e);
                None
            }
        },
        (),
    );

    let render = {
        let content = (*content).clone();
        move |routes: Route| switch(routes, content.clone())
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
