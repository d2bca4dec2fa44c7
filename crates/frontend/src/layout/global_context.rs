use crate::shared::storage::{load_bool, save_bool, SIDEBAR_OPEN_STORAGE_KEY};
use contracts::shared::form_settings::{Collapsible, FormSettings};
use contracts::shared::navigation::{parent_of, title_for_url};
use leptos::prelude::*;

/// Shell-wide state: which page is shown and how the sidebar looks.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Url of the page shown in the center zone
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    /// Ids of sidebar items whose children are visible
    pub expanded: RwSignal<Vec<String>>,
    /// Index into `TEAMS`
    pub active_team: RwSignal<usize>,
    pub collapsible: Collapsible,
}

impl AppGlobalContext {
    pub fn new(settings: &FormSettings) -> Self {
        Self::with_sidebar_open(settings, load_bool(SIDEBAR_OPEN_STORAGE_KEY))
    }

    /// Build from settings; `stored_open` is the last persisted sidebar state
    pub fn with_sidebar_open(settings: &FormSettings, stored_open: Option<bool>) -> Self {
        let collapsible = settings.sidebar.collapsible;
        let left_open = match collapsible {
            Collapsible::Disabled => true,
            _ => stored_open.unwrap_or(settings.sidebar.default_open),
        };
        let active = settings.sidebar.default_active.clone();
        let expanded = parent_of(&active)
            .map(|item| vec![item.id.to_string()])
            .unwrap_or_default();

        Self {
            active: RwSignal::new(active),
            left_open: RwSignal::new(left_open),
            expanded: RwSignal::new(expanded),
            active_team: RwSignal::new(0),
            collapsible,
        }
    }

    /// Show the page behind `url` and reveal its parent item in the sidebar.
    ///
    /// Re-activating the current url leaves `active` untouched so the page
    /// (and any form state on it) is not rebuilt.
    pub fn activate(&self, url: &str) {
        if let Some(parent) = parent_of(url) {
            if !self.is_expanded(parent.id) {
                self.toggle_group(parent.id);
            }
        }
        if self.active.with_untracked(|active| active == url) {
            return;
        }
        log::info!(
            "navigate: url='{}', title='{}'",
            url,
            title_for_url(url).unwrap_or("?")
        );
        self.active.set(url.to_string());
    }

    pub fn is_active(&self, url: &str) -> bool {
        self.active.with(|active| active == url)
    }

    pub fn toggle_group(&self, id: &str) {
        self.expanded.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == id) {
                items.remove(pos);
            } else {
                items.push(id.to_string());
            }
        });
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|items| items.iter().any(|x| x == id))
    }

    pub fn toggle_left(&self) {
        if self.collapsible == Collapsible::Disabled {
            return;
        }
        self.left_open.update(|open| *open = !*open);
        save_bool(SIDEBAR_OPEN_STORAGE_KEY, self.left_open.get_untracked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_initial_state_from_settings() {
        Owner::new().with(|| {
            let settings = FormSettings::default();
            let ctx = AppGlobalContext::with_sidebar_open(&settings, None);
            assert_eq!(ctx.active.get_untracked(), "/catalogue/add");
            assert!(ctx.left_open.get_untracked());
            assert!(ctx.is_expanded("catalogue"));

            let ctx = AppGlobalContext::with_sidebar_open(&settings, Some(false));
            assert!(!ctx.left_open.get_untracked());
        });
    }

    #[test]
    fn test_disabled_rail_stays_open() {
        Owner::new().with(|| {
            let mut settings = FormSettings::default();
            settings.sidebar.collapsible = Collapsible::Disabled;
            let ctx = AppGlobalContext::with_sidebar_open(&settings, Some(false));
            assert!(ctx.left_open.get_untracked());
        });
    }

    #[test]
    fn test_activate_expands_parent() {
        Owner::new().with(|| {
            let mut settings = FormSettings::default();
            settings.sidebar.default_active = "/".to_string();
            let ctx = AppGlobalContext::with_sidebar_open(&settings, None);
            assert!(ctx.expanded.get_untracked().is_empty());

            ctx.activate("/orders?status=pending");
            assert!(ctx.is_active("/orders?status=pending"));
            assert!(ctx.is_expanded("orders"));

            // already expanded groups stay expanded
            ctx.activate("/orders?status=completed");
            assert!(ctx.is_expanded("orders"));

            ctx.toggle_group("orders");
            assert!(!ctx.is_expanded("orders"));
        });
    }

    #[test]
    fn test_reactivating_current_url_does_not_notify() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::with_sidebar_open(&FormSettings::default(), None);
            let runs = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&runs);
            let _effect = ImmediateEffect::new(move || {
                ctx.active.track();
                counter.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.activate("/catalogue/add");
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.activate("/inventory");
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
