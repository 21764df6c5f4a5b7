//! Navigation State
//!
//! Bookkeeping performed after every committed navigation: the active route,
//! the selected transition and the per-route `view_loaded` flags.

use std::collections::HashMap;

use super::table::RouteMeta;
use super::transition::{select_transition, TransitionName};

/// The route a location resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoute {
    /// Name of the matched (leaf) route
    pub name: String,
    /// Location the route was rendered for
    pub path: String,
    /// Metadata merged from the top-level route down
    pub meta: RouteMeta,
}

/// Router state after the latest navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    /// Last committed location, matched or not
    pub location: String,
    /// `None` before the first navigation and for unmatched locations
    pub current: Option<ActiveRoute>,
    /// Transition selected by the latest navigation
    pub transition: Option<TransitionName>,
    view_loaded: HashMap<String, bool>,
}

impl NavigationState {
    /// Record a completed navigation and return the selected transition.
    ///
    /// A departing location without a named route behaves like the first
    /// load: the arriving route is marked loaded and no transition is
    /// selected.
    pub fn commit(
        &mut self,
        location: &str,
        arriving: Option<ActiveRoute>,
    ) -> Option<TransitionName> {
        let departing = self.current.take();

        if let Some(from) = &departing {
            self.view_loaded.insert(from.name.clone(), false);
        }

        let transition = arriving.as_ref().and_then(|to| {
            let transition = select_transition(departing.as_ref().map(|r| &r.meta), &to.meta);
            self.view_loaded.insert(to.name.clone(), true);
            transition
        });

        self.location = location.to_string();
        self.current = arriving;
        self.transition = transition;
        transition
    }

    pub fn is_view_loaded(&self, name: &str) -> bool {
        self.view_loaded.get(name).copied().unwrap_or(false)
    }

    /// Transition the view layer should play: the selected one, or the
    /// active route's declared transition when none was selected.
    pub fn effective_transition(&self) -> Option<TransitionName> {
        self.transition
            .or_else(|| self.current.as_ref().and_then(|r| r.meta.transition))
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.name.as_str())
    }
}
