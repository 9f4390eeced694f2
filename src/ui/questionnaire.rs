use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::{App, Notice};

use super::{format_percentage, percentage_color};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_chapter(frame, chunks[1], app.current_chapter());
    render_question_text(frame, chunks[2], question.text());
    render_options(
        frame,
        chunks[3],
        question.options(),
        app.highlighted_option(),
        app.selected_option(),
    );
    render_notice(frame, chunks[4], app.notice());
    render_controls(frame, chunks[5]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let (chapter, chapters) = app.session_progress();
    let (question, questions) = app.chapter_progress();
    let progress = format!(
        "chapter {}/{}  ·  question {}/{}",
        chapter, chapters, question, questions
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_chapter(frame: &mut Frame, area: Rect, chapter: &str) {
    let widget = Paragraph::new(format!("Chapter: {}", chapter))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    highlighted: usize,
    selected: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_selected = selected == Some(index);
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if is_highlighted { ">" } else { " " };
        let radio = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cursor), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let line = match notice {
        None => Line::from(""),
        Some(Notice::Warning(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Some(Notice::ChapterComplete {
            chapter,
            percentage,
            recommendations,
        }) => Line::from(vec![
            Span::styled(
                format!("Chapter {} completed: ", chapter),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format_percentage(*percentage),
                Style::default().fg(percentage_color(*percentage)).bold(),
            ),
            Span::styled(
                format!("  ·  {} best practices suggested", recommendations),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space select  ·  enter next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
