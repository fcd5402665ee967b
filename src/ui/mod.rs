//! UI module for rendering the TUI

mod layout;
mod results;

pub mod forms;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (content_area, status_area) = layout::create_layout(area);

    match app.state.current_view {
        View::Form => forms::draw_estimate_form(frame, content_area, app),
        View::Results => results::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
