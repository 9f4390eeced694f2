use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::scoring::ChapterReport;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "ASSIGNED BEST PRACTICES",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(title, chunks[0]);

    let lines = practice_lines(app.engine().reports());
    let scroll = app.practices_scroll().min(lines.len().saturating_sub(1));
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k scroll  ·  b back to results  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn practice_lines(reports: &[ChapterReport]) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    for report in reports {
        if report.practices.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Chapter: {} - no best practices defined", report.chapter),
                Style::default().fg(Color::DarkGray),
            )));
            continue;
        }

        for practice in &report.practices {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Chapter: {} - ", report.chapter),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("[{}] ", practice.category),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(practice.text.as_str(), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}
