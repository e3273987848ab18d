use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid landing content: {0}")]
    Content(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(Error::NoDocument)
}
