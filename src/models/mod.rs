//! Models
//!
//! Demo records shown by the dashboard views.

pub mod order;
pub mod profile;
pub mod project;

pub use order::{demo_orders, Order, OrderStatus};
pub use profile::{demo_profiles, Profile, Role};
pub use project::{demo_projects, Project};
