/// Errors raised while talking to the browser's tab APIs
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TabError {
    #[error("Browser API call failed: {0}")]
    Api(String),
    #[error("Failed to convert browser data: {0}")]
    Decode(String),
    #[error("No active tab in the current window")]
    NoActiveTab,
    #[error("Active tab has no host: {0:?}")]
    NoHost(String),
}

impl From<JsValue> for TabError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(error) => String::from(error.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        TabError::Api(message)
    }
}

impl From<serde_wasm_bindgen::Error> for TabError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        TabError::Decode(error.to_string())
    }
}
