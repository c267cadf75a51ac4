use pathway_engine::View;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, Row};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title_bar(f, app, chunks[0]);
    match app.session.view() {
        View::Editing => draw_editor(f, app, chunks[1]),
        View::Viewing => draw_roadmap(f, app, chunks[1]),
    }
    draw_help(f, app, chunks[2]);
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let screen = match app.session.view() {
        View::Editing => "Design Your Journey",
        View::Viewing => "Roadmap",
    };
    let title = Line::from(vec![
        Span::styled(
            " PathWay ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        Span::raw(screen),
    ]);
    let bar = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}

/// Source editor: the raw markdown with a block cursor, scrolled so the
/// cursor line stays visible.
fn draw_editor(f: &mut Frame, app: &App, area: Rect) {
    let text = app.session.markdown();
    let (cursor_line, _) = app.cursor_position();
    let cursor = app.cursor();

    let mut lines: Vec<Line> = Vec::new();
    let mut line_start = 0;
    // Trailing empty segment keeps the cursor visible after a final newline
    for (i, raw) in text.split('\n').enumerate() {
        let line_end = line_start + raw.len();
        if i == cursor_line {
            lines.push(line_with_cursor(raw, cursor - line_start));
        } else {
            lines.push(Line::from(Span::raw(raw.to_string())));
        }
        line_start = line_end + 1;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1)) as u16;

    let editor = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Source (# milestones, - topics) "),
        )
        .scroll((scroll, 0));
    f.render_widget(editor, area);
}

/// Render one line with a reversed-style cursor at the given byte offset.
fn line_with_cursor(raw: &str, at: usize) -> Line<'static> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let before = &raw[..at];
    let mut spans = vec![Span::raw(before.to_string())];
    match raw[at..].chars().next() {
        Some(c) => {
            let after = &raw[at + c.len_utf8()..];
            spans.push(Span::styled(c.to_string(), cursor_style));
            spans.push(Span::raw(after.to_string()));
        }
        // Cursor past the end of the line
        None => spans.push(Span::styled(" ", cursor_style)),
    }
    Line::from(spans)
}

fn draw_roadmap(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_stats_bar(f, app, chunks[0]);

    let roadmap = app.session.roadmap();
    if roadmap.is_empty() {
        let empty = Paragraph::new("No roadmap yet. Switch to the editor and press Ctrl-G.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Roadmap "))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .map(|row| match *row {
            Row::Milestone(c) => {
                let category = &roadmap.categories[c];
                ListItem::new(Line::from(Span::styled(
                    format!("{}. {}", c + 1, category.name),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )))
            }
            Row::Topic(c, t) => {
                let topic = &roadmap.categories[c].topics[t];
                let (mark, style) = if topic.completed {
                    ("[x]", Style::default().fg(Color::Green))
                } else {
                    ("[ ]", Style::default())
                };
                ListItem::new(Line::from(Span::styled(
                    format!("   {} {}", mark, topic.label),
                    style,
                )))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Roadmap "))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

/// Progress gauge plus milestone/topic counts, the viewer's stats bar.
fn draw_stats_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let roadmap = app.session.roadmap();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(app.session.progress() as u16);
    f.render_widget(gauge, chunks[0]);

    let milestones = Paragraph::new(format!("{} stages", roadmap.category_count()))
        .block(Block::default().borders(Borders::ALL).title(" Milestones "));
    f.render_widget(milestones, chunks[1]);

    let topics = Paragraph::new(format!(
        "{}/{} items done",
        roadmap.completed_count(),
        roadmap.topic_count()
    ))
    .block(Block::default().borders(Borders::ALL).title(" Topics "));
    f.render_widget(topics, chunks[2]);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.session.view() {
        View::Editing => "Ctrl-G: Generate roadmap | Tab: View roadmap | Ctrl-Q: Quit",
        View::Viewing => "q: Quit | ↑/k ↓/j: Move | Space/Enter: Toggle | Tab/e: Edit source",
    };
    f.render_widget(Paragraph::new(Line::from(Span::raw(help))), area);
}
