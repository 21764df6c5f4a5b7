//! UI Components
//!
//! Shell pieces shared by every view.

mod nav;
mod notice;

pub use nav::{Header, Sidebar};
pub use notice::{provide_notice, Notice, NoticeState};
