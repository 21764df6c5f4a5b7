//! Client Dashboard
//!
//! Browser entry point; build with `trunk serve`.

fn main() {
    client_dashboard::run();
}
