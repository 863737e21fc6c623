/// The tab-management service the organizer drives, and its Chrome binding
use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::TabError;
use crate::tab_data::{MoveProperties, TabInfo, TabQuery, WindowInfo};

/// Capabilities the organizer needs from the browser
///
/// Every call is awaited before the next one is issued; implementations are
/// free to be single-threaded, hence `?Send`.
#[async_trait(?Send)]
pub trait TabService {
    async fn query(&self, query: &TabQuery) -> Result<Vec<TabInfo>, TabError>;

    async fn move_tab(&self, tab_id: i32, properties: MoveProperties) -> Result<(), TabError>;

    async fn current_window(&self) -> Result<WindowInfo, TabError>;

    /// Open a new window holding `seed_tab_id`, moved out of its old window
    async fn create_window(&self, seed_tab_id: i32) -> Result<WindowInfo, TabError>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn chrome_tabs_query(query_info: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = move)]
    async fn chrome_tabs_move(tab_id: i32, move_properties: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "windows"], js_name = getCurrent)]
    async fn chrome_windows_get_current() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "windows"], js_name = create)]
    async fn chrome_windows_create(create_data: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWindowData {
    tab_id: i32,
}

/// `TabService` backed by the `chrome.tabs` and `chrome.windows` promise APIs
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeTabs;

#[async_trait(?Send)]
impl TabService for ChromeTabs {
    async fn query(&self, query: &TabQuery) -> Result<Vec<TabInfo>, TabError> {
        let query_js = serde_wasm_bindgen::to_value(query)?;
        let tabs_js = chrome_tabs_query(query_js).await?;
        Ok(serde_wasm_bindgen::from_value(tabs_js)?)
    }

    async fn move_tab(&self, tab_id: i32, properties: MoveProperties) -> Result<(), TabError> {
        let properties_js = serde_wasm_bindgen::to_value(&properties)?;
        chrome_tabs_move(tab_id, properties_js).await?;
        Ok(())
    }

    async fn current_window(&self) -> Result<WindowInfo, TabError> {
        let window_js = chrome_windows_get_current().await?;
        Ok(serde_wasm_bindgen::from_value(window_js)?)
    }

    async fn create_window(&self, seed_tab_id: i32) -> Result<WindowInfo, TabError> {
        let data_js = serde_wasm_bindgen::to_value(&CreateWindowData { tab_id: seed_tab_id })?;
        let window_js = chrome_windows_create(data_js).await?;
        Ok(serde_wasm_bindgen::from_value(window_js)?)
    }
}
