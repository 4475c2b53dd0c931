//! Open Brain AI site entry point.

use zoon::*;

mod app;
mod footer;
mod header;
mod hero;
mod reveal;
mod scrolling;
mod sections;
mod state;
mod theme;
mod tokens;
mod typography;

pub fn main() {
    start_app("app", || app::SiteApp::new().root());
}
