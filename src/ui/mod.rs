mod practices;
mod questionnaire;
mod results;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Questionnaire => questionnaire::render(frame, area, app),
        AppState::Results => results::render(frame, area, app),
        AppState::Practices => practices::render(frame, area, app),
    }
}

/// Text colour for a chapter percentage, `None` meaning undefined.
fn percentage_color(percentage: Option<u8>) -> Color {
    match percentage {
        Some(76..=100) => Color::Green,
        Some(51..=75) => Color::Cyan,
        Some(26..=50) => Color::Yellow,
        Some(_) => Color::Red,
        None => Color::DarkGray,
    }
}

fn format_percentage(percentage: Option<u8>) -> String {
    match percentage {
        Some(value) => format!("{}%", value),
        None => "n/a".to_string(),
    }
}
