//! Transition Selection
//!
//! Picks the directional animation played between two routes from their
//! `order` metadata.

use serde::{Deserialize, Serialize};

use super::table::RouteMeta;

/// Visual transition between two views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionName {
    Fade,
    SlideLeft,
    SlideRight,
}

impl TransitionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionName::Fade => "fade",
            TransitionName::SlideLeft => "slide-left",
            TransitionName::SlideRight => "slide-right",
        }
    }

    /// CSS class applied to a view while it enters
    pub fn enter_class(&self) -> String {
        format!("{}-enter-active", self.as_str())
    }
}

impl std::fmt::Display for TransitionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the transition for a navigation.
///
/// `from` is `None` when there is no named departing route (first load, or
/// the previous location matched nothing); no transition is selected then.
/// Otherwise moving to a higher `order` slides left and everything else
/// slides right, including navigations where either side has no `order`.
pub fn select_transition(from: Option<&RouteMeta>, to: &RouteMeta) -> Option<TransitionName> {
    let from = from?;

    match (to.order, from.order) {
        (Some(to_order), Some(from_order)) if to_order > from_order => {
            Some(TransitionName::SlideLeft)
        }
        (Some(_), Some(_)) => Some(TransitionName::SlideRight),
        _ => {
            tracing::debug!(
                from_order = ?from.order,
                to_order = ?to.order,
                "route without order metadata, falling back to slide-right"
            );
            Some(TransitionName::SlideRight)
        }
    }
}
