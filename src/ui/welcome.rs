use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let catalog = app.engine().catalog();
    let summary = format!(
        "{} Chapters · {} Questions",
        catalog.chapter_count(),
        catalog.question_count()
    );

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "AUDIT QUESTIONNAIRE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(summary.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start · q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
