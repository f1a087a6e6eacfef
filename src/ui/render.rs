use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::nav::Screen;
use crate::ui::theme::{ACCENT, BUTTON_BG, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Widest the joke text is allowed to grow before wrapping.
const MAX_BODY_WIDTH: u16 = 72;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();

    frame.render_widget(Header::widget(screen), header);
    frame.render_widget(Clear, body);

    let lines = match screen {
        Screen::Joke => joke_lines(app),
        Screen::Counter => counter_lines(app),
    };
    let height = (lines.len() as u16).saturating_add(2);
    let panel = centered_rect_by_size(body, MAX_BODY_WIDTH, height.max(body.height / 2));
    frame.render_widget(body_widget(lines, screen.title()), panel);

    frame.render_widget(Footer::widget(screen, footer), footer);
}

pub fn joke_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    // Nothing is shown until the first joke arrives.
    if let Some(joke) = app.joke() {
        lines.push(Line::from(Span::styled(
            joke.text().to_string(),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));
    }
    lines.push(button("N", "Get New Joke"));
    lines.push(button("Enter", "Go to Counter"));
    lines
}

pub fn counter_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("Counter: {}", app.counter()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        button("Space", "Increment"),
    ]
}

fn button(key: &'static str, label: &'static str) -> Line<'static> {
    let style = Style::default().bg(BUTTON_BG);
    Line::from(vec![
        Span::styled(" [", style),
        Span::styled(key, style.fg(ACCENT)),
        Span::styled("] ", style),
        Span::styled(label, style.fg(HEADER_TEXT)),
        Span::styled(" ", style),
    ])
}

fn body_widget(lines: Vec<Line<'static>>, title: &'static str) -> Paragraph<'static> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// Plain-text rendering of the current screen, used for snapshots in tests.
pub fn screen_text(app: &App) -> String {
    let lines = match app.screen() {
        Screen::Joke => joke_lines(app),
        Screen::Counter => counter_lines(app),
    };
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
