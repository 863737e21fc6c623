/// Tab operations: sorting and planning where each tab should land
use crate::collate::locale_compare;
use crate::config::PinnedPolicy;
use crate::domain::sortable_domain;
use crate::tab_data::TabInfo;

/// Sort tabs by domain key, then by title (precompute domain for each tab)
///
/// Stable: tabs with equal domain and title keep their relative order.
pub fn sort_tabs_by_domain_then_title(tabs: Vec<TabInfo>) -> Vec<TabInfo> {
    let mut tabs_with_domain: Vec<(TabInfo, String)> = tabs
        .into_iter()
        .map(|tab| {
            let domain = sortable_domain(&tab.url);
            (tab, domain)
        })
        .collect();

    tabs_with_domain.sort_by(|a, b| {
        locale_compare(&a.1, &b.1).then_with(|| locale_compare(&a.0.title, &b.0.title))
    });

    tabs_with_domain.into_iter().map(|(tab, _)| tab).collect()
}

/// Group tabs by owning window, keeping windows in order of first appearance
pub fn group_by_window(tabs: Vec<TabInfo>) -> Vec<(i32, Vec<TabInfo>)> {
    let mut windows: Vec<(i32, Vec<TabInfo>)> = Vec::new();

    for tab in tabs {
        match windows.iter_mut().find(|(id, _)| *id == tab.window_id) {
            Some((_, group)) => group.push(tab),
            None => windows.push((tab.window_id, vec![tab])),
        }
    }

    windows
}

/// Sorted tabs of one window and the index the first of them goes to
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
    pub start_index: i32,
    pub sorted: Vec<TabInfo>,
}

impl WindowPlan {
    /// Target index for every tab, in the order the moves must be issued
    pub fn moves(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.sorted
            .iter()
            .zip(self.start_index..)
            .map(|(tab, index)| (tab.id, index))
    }

    /// (domain, title) pairs in sorted order, for logging
    pub fn sort_keys(&self) -> Vec<(String, String)> {
        self.sorted
            .iter()
            .map(|tab| (sortable_domain(&tab.url), tab.title.clone()))
            .collect()
    }
}

/// Work out the sorted order for a single window's tabs
///
/// With `Preserve`, pinned tabs stay where they are and the sorted unpinned
/// tabs start right after them. With `Include`, every tab is sorted from 0.
pub fn plan_window_sort(tabs: Vec<TabInfo>, policy: PinnedPolicy) -> WindowPlan {
    match policy {
        PinnedPolicy::Preserve => {
            let (pinned, unpinned): (Vec<TabInfo>, Vec<TabInfo>) =
                tabs.into_iter().partition(|tab| tab.pinned);
            WindowPlan {
                start_index: pinned.len() as i32,
                sorted: sort_tabs_by_domain_then_title(unpinned),
            }
        }
        PinnedPolicy::Include => WindowPlan {
            start_index: 0,
            sorted: sort_tabs_by_domain_then_title(tabs),
        },
    }
}

/// Drop tabs the policy does not allow to be moved
pub fn movable_tabs(tabs: Vec<TabInfo>, policy: PinnedPolicy) -> Vec<TabInfo> {
    match policy {
        PinnedPolicy::Preserve => tabs.into_iter().filter(|tab| !tab.pinned).collect(),
        PinnedPolicy::Include => tabs,
    }
}
