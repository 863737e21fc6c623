/// The three popup actions: sort all tabs, sort this window, extract this domain
use log::{debug, error, info, warn};

use crate::config::{OrganizerConfig, PinnedPolicy};
use crate::domain::{exact_host, host_match_pattern};
use crate::error::TabError;
use crate::operations::{group_by_window, movable_tabs, plan_window_sort, WindowPlan};
use crate::tab_data::{MoveProperties, TabQuery};
use crate::tabs_api::TabService;

/// User-triggered actions, one per popup button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SortAll,
    SortWindow,
    ExtractDomain,
}

impl Action {
    /// Id of the popup button that triggers this action
    pub fn button_id(self) -> &'static str {
        match self {
            Action::SortAll => "sortAll",
            Action::SortWindow => "sortWindow",
            Action::ExtractDomain => "extractDomain",
        }
    }

    fn failure_context(self) -> &'static str {
        match self {
            Action::SortAll => "Error sorting all tabs",
            Action::SortWindow => "Error sorting window tabs",
            Action::ExtractDomain => "Error extracting domain",
        }
    }
}

/// What a sort action did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    pub windows: usize,
    pub moved: usize,
}

/// What the extract action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Extracted {
        host: String,
        window_id: i32,
        tab_count: usize,
    },
    /// Fewer than two movable tabs matched the host
    Skipped { host: String, matching: usize },
}

pub struct TabOrganizer<S> {
    service: S,
    config: OrganizerConfig,
}

impl<S: TabService> TabOrganizer<S> {
    pub fn new(service: S) -> Self {
        Self::with_config(service, OrganizerConfig::default())
    }

    pub fn with_config(service: S, config: OrganizerConfig) -> Self {
        TabOrganizer { service, config }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Run an action behind its failure boundary: errors are logged and swallowed
    pub async fn run(&self, action: Action) {
        let result = match action {
            Action::SortAll => self.sort_all_tabs().await.map(drop),
            Action::SortWindow => self.sort_current_window().await.map(drop),
            Action::ExtractDomain => self.extract_current_domain().await.map(drop),
        };

        if let Err(e) = result {
            error!("{}: {}", action.failure_context(), e);
        }
    }

    /// Sort every window's tabs by domain then title
    pub async fn sort_all_tabs(&self) -> Result<SortReport, TabError> {
        let all_tabs = self.service.query(&TabQuery::all()).await?;
        let policy = self.config.pinned_policy;
        let mut report = SortReport::default();

        for (window_id, window_tabs) in group_by_window(all_tabs) {
            let plan = plan_window_sort(window_tabs, policy);
            debug!("Sorted tabs for window {}: {:?}", window_id, plan.sort_keys());

            report.moved += self.apply_plan(&plan).await?;
            report.windows += 1;
        }

        info!("All tabs sorted by domain then title ({})", policy.describe());
        Ok(report)
    }

    /// Sort only the focused window's tabs
    pub async fn sort_current_window(&self) -> Result<SortReport, TabError> {
        let current_window = self.service.current_window().await?;
        let tabs = self.service.query(&TabQuery::in_window(current_window.id)).await?;
        let policy = self.config.pinned_policy;

        let plan = plan_window_sort(tabs, policy);
        debug!("Sorted tabs for window {}: {:?}", current_window.id, plan.sort_keys());

        let moved = self.apply_plan(&plan).await?;

        info!("Current window tabs sorted by domain then title ({})", policy.describe());
        Ok(SortReport { windows: 1, moved })
    }

    /// Pull every tab sharing the active tab's host into a new, sorted window
    pub async fn extract_current_domain(&self) -> Result<ExtractOutcome, TabError> {
        let active_tab = self
            .service
            .query(&TabQuery::active_in_current_window())
            .await?
            .into_iter()
            .next()
            .ok_or(TabError::NoActiveTab)?;

        let host = exact_host(&active_tab.url).ok_or_else(|| TabError::NoHost(active_tab.url.clone()))?;

        let matching = self
            .service
            .query(&TabQuery::matching_url(host_match_pattern(&host)))
            .await?;
        let candidates = movable_tabs(matching, self.config.pinned_policy);

        if candidates.len() <= 1 {
            warn!("Only one {} found for {}, no extraction needed", self.candidate_noun(), host);
            return Ok(ExtractOutcome::Skipped {
                host,
                matching: candidates.len(),
            });
        }

        let tab_ids: Vec<i32> = candidates.iter().map(|tab| tab.id).collect();
        let new_window = self.service.create_window(tab_ids[0]).await?;

        for &tab_id in &tab_ids[1..] {
            self.service.move_tab(tab_id, MoveProperties::append_to(new_window.id)).await?;
        }

        let new_window_tabs = self.service.query(&TabQuery::in_window(new_window.id)).await?;
        let plan = plan_window_sort(new_window_tabs, self.config.pinned_policy);
        self.apply_plan(&plan).await?;

        info!(
            "Extracted {} tabs for {} into new window {} and sorted",
            tab_ids.len(),
            host,
            new_window.id
        );
        Ok(ExtractOutcome::Extracted {
            host,
            window_id: new_window.id,
            tab_count: tab_ids.len(),
        })
    }

    /// Issue one move per tab, each awaited before the next
    async fn apply_plan(&self, plan: &WindowPlan) -> Result<usize, TabError> {
        let mut moved = 0;
        for (tab_id, index) in plan.moves() {
            self.service.move_tab(tab_id, MoveProperties::to_index(index)).await?;
            moved += 1;
        }
        Ok(moved)
    }

    fn candidate_noun(&self) -> &'static str {
        match self.config.pinned_policy {
            PinnedPolicy::Preserve => "unpinned tab",
            PinnedPolicy::Include => "tab",
        }
    }
}
