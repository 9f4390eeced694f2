use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::{format_percentage, percentage_color};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_total(frame, chunks[1], app.engine().state().total_score());
    render_chapter_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_total(frame: &mut Frame, area: Rect, total_score: i64) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total Score: {}", total_score),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_chapter_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .engine()
        .reports()
        .iter()
        .map(|report| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>5} ", format_percentage(report.percentage)),
                    Style::default().fg(percentage_color(report.percentage)),
                ),
                Span::styled(
                    format!("Chapter {}: ", report.chapter),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{} / {}", report.score, report.max_possible),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("b best practices  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
