//! Client-side Routing
//!
//! `leptos_router` matches locations, drives the History API and renders
//! nested outlets. This module layers what it has no notion of on top:
//! named routes with metadata, deferred views, and the transition selected
//! for each navigation.
//!
//! Every committed navigation runs the transition selector synchronously:
//! the departing route is marked unloaded, the arriving route loaded, and a
//! slide direction is chosen from the routes' `order` metadata. The view
//! layer reads the result from [`NavigationState`].

pub mod navigation;
pub mod pattern;
pub mod table;
pub mod transition;
pub mod view;

use std::rc::Rc;

use leptos::*;

pub use navigation::{ActiveRoute, NavigationState};
pub use pattern::{Params, PathPattern};
pub use table::{RouteDef, RouteMeta, RouteRecord, RouteTable, ViewFn, ViewRef};
pub use transition::{select_transition, TransitionName};
pub use view::RouteTree;

use crate::error::RouterError;

/// Classes applied to links whose target contains the current location
pub const ACTIVE_LINK_CLASS: &str =
    "font-bold bg-primary-400 rounded-lg text-white dark:bg-secondary-400 shadow-md";

/// Route table and navigation state shared with the component tree
#[derive(Clone)]
pub struct AppRouter {
    table: Rc<RouteTable>,
    state: RwSignal<NavigationState>,
}

impl AppRouter {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Rc::new(table),
            state: create_rw_signal(NavigationState::default()),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn state(&self) -> RwSignal<NavigationState> {
        self.state
    }

    /// Name of the active route (tracked)
    pub fn current_name(&self) -> Option<String> {
        self.state.with(|s| s.current_name().map(str::to_string))
    }

    /// Commit a navigation to `location`, rendered by the route `name`.
    ///
    /// `None` (or a name missing from the table) records an unmatched
    /// location. Runs the transition selector and returns its decision.
    pub fn commit(&self, location: &str, name: Option<&str>) -> Option<TransitionName> {
        let arriving = match name {
            Some(name) => match self.table.by_name(name) {
                Some(record) => Some(ActiveRoute {
                    name: record.name.clone(),
                    path: location.to_string(),
                    meta: record.meta,
                }),
                None => {
                    tracing::warn!(location, "{}", RouterError::UnknownName(name.to_string()));
                    None
                }
            },
            None => {
                tracing::warn!(location, "{}", RouterError::NoMatch(location.to_string()));
                None
            }
        };

        let mut transition = None;
        self.state.update(|state| {
            let from = state.current_name().map(str::to_string);
            transition = state.commit(location, arriving);
            tracing::debug!(
                from = ?from,
                to = ?state.current_name(),
                transition = ?transition,
                "navigation committed"
            );
        });
        transition
    }

    /// Path of a named route
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        self.table.href(name, params)
    }

    /// Path of a named route; falls back to `/` for unknown names
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> String {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Params>();

        self.path_for(name, &params).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            "/".to_string()
        })
    }
}
