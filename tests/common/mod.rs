//! In-memory browser used to drive the organizer in tests
#![allow(dead_code)]

use std::cell::RefCell;

use async_trait::async_trait;
use tab_sorter::domain::exact_host;
use tab_sorter::error::TabError;
use tab_sorter::tab_data::{MoveProperties, TabInfo, TabQuery, WindowInfo, APPEND_INDEX};
use tab_sorter::tabs_api::TabService;
use url::Url;

/// A call the organizer made against the fake, in issue order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(TabQuery),
    Move(i32, MoveProperties),
    CurrentWindow,
    CreateWindow(i32),
}

#[derive(Default)]
struct State {
    windows: Vec<(i32, Vec<TabInfo>)>,
    focused: i32,
    next_window_id: i32,
    calls: Vec<Call>,
    moves_before_failure: Option<usize>,
}

pub struct FakeBrowser {
    state: RefCell<State>,
}

pub fn tab(id: i32, url: &str, title: &str) -> TabInfo {
    TabInfo::new(id, url.to_string(), title.to_string(), 0, false, 0)
}

pub fn pinned(id: i32, url: &str, title: &str) -> TabInfo {
    TabInfo::new(id, url.to_string(), title.to_string(), 0, true, 0)
}

impl FakeBrowser {
    pub fn new() -> Self {
        FakeBrowser {
            state: RefCell::new(State {
                next_window_id: 100,
                ..State::default()
            }),
        }
    }

    /// Add a window; the first window added gets focus
    pub fn with_window(self, window_id: i32, tabs: Vec<TabInfo>) -> Self {
        {
            let mut state = self.state.borrow_mut();
            if state.windows.is_empty() {
                state.focused = window_id;
            }
            let tabs = tabs
                .into_iter()
                .map(|mut tab| {
                    tab.window_id = window_id;
                    tab
                })
                .collect();
            state.windows.push((window_id, tabs));
        }
        self
    }

    /// Make `tab_id` the active tab and focus its window
    pub fn with_active(self, tab_id: i32) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let mut focused = None;
            for (window_id, tabs) in state.windows.iter_mut() {
                if tabs.iter().any(|t| t.id == tab_id) {
                    for t in tabs.iter_mut() {
                        t.active = t.id == tab_id;
                    }
                    focused = Some(*window_id);
                }
            }
            if let Some(window_id) = focused {
                state.focused = window_id;
            }
        }
        self
    }

    /// Let `count` moves succeed, then reject every move after that
    pub fn failing_moves_after(self, count: usize) -> Self {
        self.state.borrow_mut().moves_before_failure = Some(count);
        self
    }

    pub fn window_ids(&self) -> Vec<i32> {
        self.state.borrow().windows.iter().map(|(id, _)| *id).collect()
    }

    pub fn tab_ids(&self, window_id: i32) -> Vec<i32> {
        self.state
            .borrow()
            .windows
            .iter()
            .find(|(id, _)| *id == window_id)
            .map(|(_, tabs)| tabs.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn moves(&self) -> Vec<(i32, MoveProperties)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Move(id, props) => Some((id, props)),
                _ => None,
            })
            .collect()
    }

    pub fn created_windows(&self) -> Vec<i32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateWindow(seed) => Some(seed),
                _ => None,
            })
            .collect()
    }
}

impl State {
    fn snapshot(&self) -> Vec<TabInfo> {
        let mut all = Vec::new();
        for (window_id, tabs) in &self.windows {
            for (index, tab) in tabs.iter().enumerate() {
                let mut tab = tab.clone();
                tab.window_id = *window_id;
                tab.index = index as i32;
                all.push(tab);
            }
        }
        all
    }

    fn take_tab(&mut self, tab_id: i32) -> Result<(i32, TabInfo), TabError> {
        for (window_id, tabs) in self.windows.iter_mut() {
            if let Some(position) = tabs.iter().position(|t| t.id == tab_id) {
                return Ok((*window_id, tabs.remove(position)));
            }
        }
        Err(TabError::Api(format!("No tab with id: {}.", tab_id)))
    }

    /// The browser closes a window once its last tab leaves
    fn close_empty_windows(&mut self) {
        self.windows.retain(|(_, tabs)| !tabs.is_empty());
    }
}

/// `*://host/*` matches http(s) pages on exactly that host
fn matches_pattern(pattern: &str, url: &str) -> bool {
    let Some(host) = pattern.strip_prefix("*://").and_then(|rest| rest.strip_suffix("/*")) else {
        return false;
    };
    let is_web = Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);

    is_web && exact_host(url).as_deref() == Some(host)
}

#[async_trait(?Send)]
impl TabService for FakeBrowser {
    async fn query(&self, query: &TabQuery) -> Result<Vec<TabInfo>, TabError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Query(query.clone()));
        let focused = state.focused;

        Ok(state
            .snapshot()
            .into_iter()
            .filter(|t| query.window_id.is_none_or(|id| t.window_id == id))
            .filter(|t| query.active.is_none_or(|active| t.active == active))
            .filter(|t| query.current_window.is_none_or(|current| (t.window_id == focused) == current))
            .filter(|t| query.url.as_deref().is_none_or(|pattern| matches_pattern(pattern, &t.url)))
            .collect())
    }

    async fn move_tab(&self, tab_id: i32, properties: MoveProperties) -> Result<(), TabError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Move(tab_id, properties));

        if let Some(remaining) = state.moves_before_failure {
            if remaining == 0 {
                return Err(TabError::Api("Tabs cannot be edited right now".to_string()));
            }
            state.moves_before_failure = Some(remaining - 1);
        }

        if let Some(window_id) = properties.window_id {
            if !state.windows.iter().any(|(id, _)| *id == window_id) {
                return Err(TabError::Api(format!("No window with id: {}.", window_id)));
            }
        }

        let (source_window, mut moved) = state.take_tab(tab_id)?;
        let target_window = properties.window_id.unwrap_or(source_window);
        moved.window_id = target_window;

        if let Some((_, tabs)) = state.windows.iter_mut().find(|(id, _)| *id == target_window) {
            if properties.index == APPEND_INDEX || properties.index as usize >= tabs.len() {
                tabs.push(moved);
            } else {
                tabs.insert(properties.index as usize, moved);
            }
        }

        state.close_empty_windows();
        Ok(())
    }

    async fn current_window(&self) -> Result<WindowInfo, TabError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::CurrentWindow);
        Ok(WindowInfo { id: state.focused })
    }

    async fn create_window(&self, seed_tab_id: i32) -> Result<WindowInfo, TabError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::CreateWindow(seed_tab_id));

        let (_, mut seed) = state.take_tab(seed_tab_id)?;
        let window_id = state.next_window_id;
        state.next_window_id += 1;

        seed.window_id = window_id;
        state.windows.push((window_id, vec![seed]));
        state.focused = window_id;
        state.close_empty_windows();

        Ok(WindowInfo { id: window_id })
    }
}
