//! User Interface Module
//!
//! Rendering for the snippet listing, the detail overlay and the add-snippet page.
//! Everything here reads `App` state; the only thing written back is the screen
//! geometry mouse clicks are resolved against.

pub mod add_snippet;
pub mod colors;
pub mod components;
pub mod detail;
pub mod gallery;
pub mod help;
pub mod highlight;

use crate::app::App;
use crate::models::Route;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.overlay_area = None;
    app.card_areas.clear();

    match app.route {
        Route::Listing => gallery::render(frame, app),
        Route::AddSnippet => add_snippet::render(frame, app),
    }

    if app.show_help {
        help::render(frame);
    }
    components::render_toast(frame, app);
}
