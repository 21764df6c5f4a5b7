//! Route Table
//!
//! Static route definitions flattened into addressable records. Definitions
//! form a tree: children are resolved relative to their parent path and
//! inherit the parent's metadata. The table is the source of the
//! `leptos_router` route tree (see `view::RouteTree`) and keeps what the
//! router itself has no notion of: route names, metadata and deferred views.

use std::cell::OnceCell;
use std::collections::HashMap;

use leptos::View;

use super::pattern::{Params, PathPattern};
use super::transition::TransitionName;
use crate::error::RouterError;

/// Renders a view
pub type ViewFn = fn() -> View;

/// Route metadata consumed by the view layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Declared transition, used when no directional transition applies
    pub transition: Option<TransitionName>,
    /// Rank used to pick the slide direction
    pub order: Option<i32>,
}

impl RouteMeta {
    pub fn new(transition: TransitionName, order: i32) -> Self {
        Self {
            transition: Some(transition),
            order: Some(order),
        }
    }

    /// Overlay `child` on top of `self`; fields set on the child win.
    pub fn merged(&self, child: &RouteMeta) -> RouteMeta {
        RouteMeta {
            transition: child.transition.or(self.transition),
            order: child.order.or(self.order),
        }
    }
}

/// A view resolved on first render instead of at startup
pub struct DeferredView {
    loader: fn() -> ViewFn,
    resolved: OnceCell<ViewFn>,
}

impl DeferredView {
    pub fn new(loader: fn() -> ViewFn) -> Self {
        Self {
            loader,
            resolved: OnceCell::new(),
        }
    }

    pub fn resolve(&self) -> ViewFn {
        *self.resolved.get_or_init(|| (self.loader)())
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

/// How a route's view is obtained
pub enum ViewRef {
    Eager(ViewFn),
    Deferred(DeferredView),
}

impl ViewRef {
    pub fn eager(view: ViewFn) -> Self {
        ViewRef::Eager(view)
    }

    pub fn deferred(loader: fn() -> ViewFn) -> Self {
        ViewRef::Deferred(DeferredView::new(loader))
    }

    pub fn resolve(&self) -> ViewFn {
        match self {
            ViewRef::Eager(view) => *view,
            ViewRef::Deferred(deferred) => deferred.resolve(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            ViewRef::Eager(_) => true,
            ViewRef::Deferred(deferred) => deferred.is_resolved(),
        }
    }
}

impl std::fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewRef::Eager(_) => f.write_str("Eager"),
            ViewRef::Deferred(d) if d.is_resolved() => f.write_str("Deferred(resolved)"),
            ViewRef::Deferred(_) => f.write_str("Deferred(pending)"),
        }
    }
}

/// A route definition as written in the route table
#[derive(Debug)]
pub struct RouteDef {
    pub path: String,
    pub name: String,
    pub view: ViewRef,
    pub children: Vec<RouteDef>,
    pub meta: RouteMeta,
}

impl RouteDef {
    pub fn new(path: &str, name: &str, view: ViewRef) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            view,
            children: Vec::new(),
            meta: RouteMeta::default(),
        }
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}

/// A flattened route with its full path and merged metadata
#[derive(Debug)]
pub struct RouteRecord {
    pub name: String,
    /// Path as written, relative to the parent
    pub path: String,
    /// Full path template
    pub pattern: PathPattern,
    pub view: ViewRef,
    pub meta: RouteMeta,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl RouteRecord {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Resolved route table
#[derive(Debug)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    /// Top-level record ids, in declaration order
    roots: Vec<usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Flatten route definitions, rejecting duplicate names
    pub fn new(routes: Vec<RouteDef>) -> Result<Self, RouterError> {
        let mut table = Self {
            records: Vec::new(),
            roots: Vec::new(),
            by_name: HashMap::new(),
        };

        let root = PathPattern::parse("/");
        for route in routes {
            table.insert(route, None, &root, &RouteMeta::default())?;
        }

        tracing::debug!(routes = table.records.len(), "route table resolved");
        Ok(table)
    }

    fn insert(
        &mut self,
        route: RouteDef,
        parent: Option<usize>,
        base: &PathPattern,
        inherited: &RouteMeta,
    ) -> Result<(), RouterError> {
        let RouteDef {
            path,
            name,
            view,
            children,
            meta,
        } = route;

        if self.by_name.contains_key(&name) {
            return Err(RouterError::DuplicateName(name));
        }

        let id = self.records.len();
        let pattern = base.join(&path);
        let meta = inherited.merged(&meta);

        self.by_name.insert(name.clone(), id);
        self.records.push(RouteRecord {
            name,
            path,
            pattern: pattern.clone(),
            view,
            meta,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent) => self.records[parent].children.push(id),
            None => self.roots.push(id),
        }

        for child in children {
            self.insert(child, Some(id), &pattern, &meta)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, id: usize) -> Option<&RouteRecord> {
        self.records.get(id)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.by_name.get(name).and_then(|&id| self.records.get(id))
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Resolve the view for a record, loading deferred views on first use
    pub fn view(&self, id: usize) -> Option<ViewFn> {
        let record = self.records.get(id)?;
        if !record.view.is_resolved() {
            tracing::debug!(route = %record.name, "loading deferred view");
        }
        Some(record.view.resolve())
    }

    /// Build the path for a named route
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let record = self
            .by_name(name)
            .ok_or_else(|| RouterError::UnknownName(name.to_string()))?;

        record
            .pattern
            .build(params)
            .map_err(|param| RouterError::MissingParam {
                route: name.to_string(),
                param,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::IntoView;
    use std::cell::Cell;

    fn blank() -> View {
        ().into_view()
    }

    thread_local! {
        static LOADS: Cell<usize> = Cell::new(0);
    }

    fn counting_loader() -> ViewFn {
        LOADS.with(|loads| loads.set(loads.get() + 1));
        blank
    }

    fn sample() -> Vec<RouteDef> {
        vec![
            RouteDef::new("/", "Home", ViewRef::eager(blank))
                .meta(RouteMeta::new(TransitionName::Fade, 0)),
            RouteDef::new("/test", "Test", ViewRef::eager(blank)),
            RouteDef::new("/orders", "Orders", ViewRef::deferred(|| blank as ViewFn)).children(vec![
                RouteDef::new("", "Manage Orders", ViewRef::deferred(|| blank as ViewFn)),
                RouteDef::new("details/:id", "Order Details", ViewRef::deferred(|| blank as ViewFn)),
            ]),
            RouteDef::new("/profiles", "Profiles", ViewRef::eager(blank))
                .meta(RouteMeta::new(TransitionName::Fade, 3))
                .children(vec![
                    RouteDef::new("", "Manage Profiles", ViewRef::deferred(|| blank as ViewFn)),
                    RouteDef::new("new", "New Profile", ViewRef::deferred(|| blank as ViewFn)),
                ]),
        ]
    }

    #[test]
    fn test_flattens_nested_routes() {
        let table = RouteTable::new(sample()).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.by_name("Order Details").unwrap().pattern.as_str(),
            "/orders/details/:id"
        );
        assert_eq!(
            table.by_name("Manage Profiles").unwrap().pattern.as_str(),
            "/profiles"
        );
    }

    #[test]
    fn test_tree_structure() {
        let table = RouteTable::new(sample()).unwrap();
        let roots = table
            .roots()
            .iter()
            .map(|&id| table.record(id).unwrap().name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(roots, vec!["Home", "Test", "Orders", "Profiles"]);

        let orders = table.by_name("Orders").unwrap();
        assert!(!orders.is_leaf());
        let children = orders
            .children
            .iter()
            .map(|&id| table.record(id).unwrap())
            .map(|r| (r.path.as_str(), r.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(children, vec![("", "Manage Orders"), ("details/:id", "Order Details")]);

        let details = table.by_name("Order Details").unwrap();
        assert!(details.is_leaf());
        assert_eq!(details.parent, table.roots().get(2).copied());
    }

    #[test]
    fn test_children_inherit_meta() {
        let table = RouteTable::new(sample()).unwrap();
        let record = table.by_name("New Profile").unwrap();
        assert_eq!(record.meta.order, Some(3));
        assert_eq!(record.meta.transition, Some(TransitionName::Fade));

        let record = table.by_name("Order Details").unwrap();
        assert_eq!(record.meta, RouteMeta::default());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let routes = vec![
            RouteDef::new("/", "Home", ViewRef::eager(blank)),
            RouteDef::new("/a", "A", ViewRef::eager(blank))
                .children(vec![RouteDef::new("b", "Home", ViewRef::eager(blank))]),
        ];
        assert_eq!(
            RouteTable::new(routes).unwrap_err(),
            RouterError::DuplicateName("Home".to_string())
        );
    }

    #[test]
    fn test_href() {
        let table = RouteTable::new(sample()).unwrap();
        let mut params = Params::new();
        params.insert("id".to_string(), "12".to_string());

        assert_eq!(table.href("Order Details", &params).unwrap(), "/orders/details/12");
        assert_eq!(table.href("Home", &Params::new()).unwrap(), "/");
        assert!(matches!(
            table.href("Order Details", &Params::new()),
            Err(RouterError::MissingParam { .. })
        ));
        assert!(matches!(
            table.href("Missing", &Params::new()),
            Err(RouterError::UnknownName(_))
        ));
    }

    #[test]
    fn test_deferred_view_loads_once() {
        let table = RouteTable::new(vec![RouteDef::new(
            "/lazy",
            "Lazy",
            ViewRef::deferred(counting_loader),
        )])
        .unwrap();

        let record = table.by_name("Lazy").unwrap();
        assert!(!record.view.is_resolved());
        assert_eq!(LOADS.with(Cell::get), 0);

        table.view(0).unwrap();
        table.view(0).unwrap();
        assert!(table.by_name("Lazy").unwrap().view.is_resolved());
        assert_eq!(LOADS.with(Cell::get), 1);
    }
}
