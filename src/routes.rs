//! Route Table
//!
//! The dashboard's routes. Top-level routes carrying an `order` take part
//! in directional transitions; nested views are loaded on first visit.

use leptos::*;

use crate::router::{RouteDef, RouteMeta, TransitionName, ViewFn, ViewRef};
use crate::views::{
    orders::{OrderDetails, OrdersList, OrdersView},
    profiles::{NewUser, ProfileDetails, ProfileList, ProfilesView},
    HomeView, NotFound, ProgressBarTestView, ProjectsView,
};

/// Fallback rendered for locations that match no route
pub fn not_found() -> View {
    NotFound().into_view()
}

pub fn app_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/", "Home", ViewRef::eager(|| HomeView().into_view()))
            .meta(RouteMeta::new(TransitionName::Fade, 0)),
        RouteDef::new(
            "/test",
            "ProgressBarTest",
            ViewRef::eager(|| ProgressBarTestView().into_view()),
        ),
        RouteDef::new(
            "/projects",
            "projects",
            ViewRef::eager(|| ProjectsView().into_view()),
        )
        .meta(RouteMeta::new(TransitionName::Fade, 1)),
        RouteDef::new(
            "/orders",
            "Orders",
            ViewRef::deferred(|| (|| OrdersView().into_view()) as ViewFn),
        )
        .children(vec![
            RouteDef::new(
                "",
                "Manage Orders",
                ViewRef::deferred(|| (|| OrdersList().into_view()) as ViewFn),
            ),
            RouteDef::new(
                "details/:id",
                "Order Details",
                ViewRef::deferred(|| (|| OrderDetails().into_view()) as ViewFn),
            ),
        ]),
        RouteDef::new(
            "/profiles",
            "Profiles",
            ViewRef::eager(|| ProfilesView().into_view()),
        )
        .children(vec![
            RouteDef::new(
                "",
                "Manage Profiles",
                ViewRef::deferred(|| (|| ProfileList().into_view()) as ViewFn),
            ),
            RouteDef::new(
                "new",
                "New Profile",
                ViewRef::deferred(|| (|| NewUser().into_view()) as ViewFn),
            ),
            RouteDef::new(
                "details/:id",
                "Profile Details",
                ViewRef::deferred(|| (|| ProfileDetails().into_view()) as ViewFn),
            ),
        ])
        .meta(RouteMeta::new(TransitionName::Fade, 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{AppRouter, RouteTable};

    #[test]
    fn test_table_builds_with_unique_names() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_route_addresses() {
        let table = RouteTable::new(app_routes()).unwrap();
        let cases = [
            ("Home", "/"),
            ("ProgressBarTest", "/test"),
            ("projects", "/projects"),
            ("Orders", "/orders"),
            ("Manage Orders", "/orders"),
            ("Manage Profiles", "/profiles"),
            ("New Profile", "/profiles/new"),
            ("Profile Details", "/profiles/details/:id"),
            ("Order Details", "/orders/details/:id"),
        ];
        for (name, path) in cases {
            assert_eq!(table.by_name(name).map(|r| r.pattern.as_str()), Some(path), "{}", name);
        }
    }

    #[test]
    fn test_only_leaves_commit_navigations() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert!(!table.by_name("Orders").unwrap().is_leaf());
        assert!(!table.by_name("Profiles").unwrap().is_leaf());
        assert!(table.by_name("Manage Orders").unwrap().is_leaf());
        assert!(table.by_name("Home").unwrap().is_leaf());
    }

    #[test]
    fn test_nested_views_are_deferred() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert!(table.by_name("Home").unwrap().view.is_resolved());
        assert!(!table.by_name("Orders").unwrap().view.is_resolved());
        assert!(!table.by_name("New Profile").unwrap().view.is_resolved());
    }

    #[test]
    fn test_documented_scenarios() {
        let runtime = create_runtime();
        let router = AppRouter::new(RouteTable::new(app_routes()).unwrap());

        // First load: no transition, landing route loaded
        assert_eq!(router.commit("/", Some("Home")), None);
        assert!(router.state().get_untracked().is_view_loaded("Home"));

        // Home (0) -> projects (1)
        assert_eq!(
            router.commit("/projects", Some("projects")),
            Some(TransitionName::SlideLeft)
        );

        // Profiles (3) -> Home (0)
        router.commit("/profiles", Some("Manage Profiles"));
        assert_eq!(router.commit("/", Some("Home")), Some(TransitionName::SlideRight));

        // Test route has no order
        assert_eq!(
            router.commit("/test", Some("ProgressBarTest")),
            Some(TransitionName::SlideRight)
        );
        assert_eq!(
            router.commit("/projects", Some("projects")),
            Some(TransitionName::SlideRight)
        );

        let state = router.state().get_untracked();
        assert!(state.is_view_loaded("projects"));
        assert!(!state.is_view_loaded("ProgressBarTest"));

        runtime.dispose();
    }
}
