/// Data structures exchanged with the browser's tabs and windows APIs
use serde::{Deserialize, Serialize};

/// Snapshot of a browser tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub window_id: i32,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub index: i32,
}

impl TabInfo {
    pub fn new(id: i32, url: String, title: String, window_id: i32, pinned: bool, index: i32) -> TabInfo {
        TabInfo {
            id,
            url,
            title,
            window_id,
            pinned,
            active: false,
            index,
        }
    }
}

/// Snapshot of a browser window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: i32,
}

/// Filter for `chrome.tabs.query`; unset fields are left out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_window: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TabQuery {
    /// Every tab in every window
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_window(window_id: i32) -> Self {
        TabQuery {
            window_id: Some(window_id),
            ..Self::default()
        }
    }

    /// The focused tab of the focused window
    pub fn active_in_current_window() -> Self {
        TabQuery {
            active: Some(true),
            current_window: Some(true),
            ..Self::default()
        }
    }

    pub fn matching_url(pattern: impl Into<String>) -> Self {
        TabQuery {
            url: Some(pattern.into()),
            ..Self::default()
        }
    }
}

/// Index value telling the browser to append to the end of the tab strip
pub const APPEND_INDEX: i32 = -1;

/// Destination of a single `chrome.tabs.move`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i32>,
    pub index: i32,
}

impl MoveProperties {
    /// Reposition within the tab's current window
    pub fn to_index(index: i32) -> Self {
        MoveProperties {
            window_id: None,
            index,
        }
    }

    /// Append to the end of another window
    pub fn append_to(window_id: i32) -> Self {
        MoveProperties {
            window_id: Some(window_id),
            index: APPEND_INDEX,
        }
    }
}
