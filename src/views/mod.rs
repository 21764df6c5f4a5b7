//! Views
//!
//! Components rendered by the route table.

mod home;
mod not_found;
pub mod orders;
pub mod profiles;
mod progress;
mod projects;

pub use home::HomeView;
pub use not_found::NotFound;
pub use progress::ProgressBarTestView;
pub use projects::ProjectsView;
