//! Route Tree
//!
//! Builds the `leptos_router` `<Routes>` tree from the route table. Each
//! rendered leaf commits the navigation before its view is built, and
//! top-level views are wrapped in a frame carrying the enter transition.

use leptos::*;
use leptos_router::{use_location, Route, RouteProps, Routes, RoutesProps};

use super::{AppRouter, TransitionName, ViewFn};

/// Class of the frame wrapping a top-level view
pub fn frame_class(transition: Option<TransitionName>) -> String {
    match transition {
        Some(transition) => format!("route-view {}", transition.enter_class()),
        None => "route-view".to_string(),
    }
}

/// All routes of the table, plus a catch-all rendering `fallback`
#[component]
pub fn RouteTree(
    /// Rendered when the location matches no route
    fallback: ViewFn,
) -> impl IntoView {
    let router = expect_context::<AppRouter>();

    let mut routes = router
        .table()
        .roots()
        .iter()
        .map(|&id| route_definition(&router, id))
        .collect::<Vec<_>>();
    routes.push(catch_all(&router, fallback));

    Routes(
        RoutesProps::builder()
            .children(Box::new(move || Fragment::new(routes)))
            .build(),
    )
}

fn route_definition(router: &AppRouter, id: usize) -> View {
    let Some(record) = router.table().record(id) else {
        return ().into_view();
    };

    let children = record
        .children
        .iter()
        .map(|&child| route_definition(router, child))
        .collect::<Vec<_>>();

    let view = {
        let router = router.clone();
        move || render_route(&router, id)
    };

    let props = RouteProps::builder().path(record.path.clone()).view(view);
    if children.is_empty() {
        Route(props.build()).into_view()
    } else {
        Route(props.children(Box::new(move || Fragment::new(children))).build()).into_view()
    }
}

fn catch_all(router: &AppRouter, fallback: ViewFn) -> View {
    let router = router.clone();
    let view = move || {
        let location = use_location().pathname.get_untracked();
        router.commit(&location, None);
        frame(&router, fallback())
    };

    Route(RouteProps::builder().path("/*any").view(view).build()).into_view()
}

fn render_route(router: &AppRouter, id: usize) -> View {
    let table = router.table();
    let (Some(record), Some(view)) = (table.record(id), table.view(id)) else {
        return ().into_view();
    };

    if record.is_leaf() {
        let location = use_location().pathname.get_untracked();
        router.commit(&location, Some(&record.name));
    }

    // Nested leaves commit while their parent builds its outlet
    let content = view();
    if record.parent.is_some() {
        return content;
    }
    frame(router, content)
}

fn frame(router: &AppRouter, content: View) -> View {
    let state = router.state();
    let class = state.with_untracked(|s| frame_class(s.effective_transition()));

    view! {
        <div
            class=class
            data-route=move || state.with(|s| s.current_name().unwrap_or_default().to_string())
            data-view-loaded=move || {
                state.with(|s| {
                    s.current_name()
                        .map(|name| s.is_view_loaded(name))
                        .unwrap_or(false)
                        .to_string()
                })
            }
        >
            {content}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(None), "route-view");
        assert_eq!(
            frame_class(Some(TransitionName::SlideLeft)),
            "route-view slide-left-enter-active"
        );
        assert_eq!(
            frame_class(Some(TransitionName::Fade)),
            "route-view fade-enter-active"
        );
    }
}
