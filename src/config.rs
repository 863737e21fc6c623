/// Runtime settings for the organizer; built in code or passed from JS, never persisted
use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// How the sort and extract actions treat pinned tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinnedPolicy {
    /// Pinned tabs are never moved; sorting starts right after them
    #[default]
    Preserve,
    /// Pinned tabs are sorted and extracted like any other tab
    Include,
}

impl PinnedPolicy {
    pub fn describe(self) -> &'static str {
        match self {
            PinnedPolicy::Preserve => "pinned tabs preserved",
            PinnedPolicy::Include => "pinned tabs included",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizerConfig {
    pub pinned_policy: PinnedPolicy,
    pub log_level: log::Level,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizerConfig {
    pub fn new() -> Self {
        OrganizerConfig {
            pinned_policy: PinnedPolicy::Preserve,
            log_level: log::Level::Info,
        }
    }

    pub fn with_pinned_policy(mut self, pinned_policy: PinnedPolicy) -> Self {
        self.pinned_policy = pinned_policy;
        self
    }

    pub fn with_log_level(mut self, log_level: log::Level) -> Self {
        self.log_level = log_level;
        self
    }
}

thread_local! {
    static ACTIVE: RefCell<OrganizerConfig> = RefCell::new(OrganizerConfig::new());
}

/// Make `config` the one every later action picks up
pub fn install(config: OrganizerConfig) {
    ACTIVE.with(|active| *active.borrow_mut() = config);
}

/// The most recently installed config, or the defaults
pub fn active() -> OrganizerConfig {
    ACTIVE.with(|active| active.borrow().clone())
}
