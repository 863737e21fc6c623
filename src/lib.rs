/// Tab Sorter - Chrome Extension for sorting and regrouping tabs
/// Built with Rust + WASM + Yew

mod collate;
pub mod config;
pub mod domain;
pub mod error;
pub mod operations;
pub mod organizer;
pub mod tab_data;
pub mod tabs_api;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::OrganizerConfig;
use crate::organizer::{Action, TabOrganizer};
use crate::tabs_api::ChromeTabs;

// Set up panic hook and logging for the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(OrganizerConfig::default().log_level.to_level_filter());
}

// Re-export the domain key for JavaScript access
#[wasm_bindgen]
pub fn sortable_domain(url: &str) -> String {
    domain::sortable_domain(url)
}

// The exported actions run with whatever config `start_with_config` installed
#[wasm_bindgen(js_name = sortAllTabs)]
pub async fn sort_all_tabs() {
    TabOrganizer::with_config(ChromeTabs, config::active()).run(Action::SortAll).await;
}

#[wasm_bindgen(js_name = sortThisWindow)]
pub async fn sort_this_window() {
    TabOrganizer::with_config(ChromeTabs, config::active()).run(Action::SortWindow).await;
}

#[wasm_bindgen(js_name = extractThisDomain)]
pub async fn extract_this_domain() {
    TabOrganizer::with_config(ChromeTabs, config::active()).run(Action::ExtractDomain).await;
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the popup with overrides, e.g. `{ pinnedPolicy: "include", logLevel: "debug" }`
#[wasm_bindgen]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: OrganizerConfig = serde_wasm_bindgen::from_value(config)?;
    log::set_max_level(config.log_level.to_level_filter());
    config::install(config.clone());
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}
