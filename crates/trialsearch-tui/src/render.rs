//! Top-level render pass.
//!
//! Reads state, never mutates it. Per-trial display values are recomputed
//! from the raw records on every pass by the projector in
//! `trialsearch_core::project`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;
use crate::{input, results};

pub fn render(app: &AppState, frame: &mut Frame) {
    let has_chips = app
        .session
        .interpretation
        .as_ref()
        .is_some_and(|i| !trialsearch_core::project::interpretation_chips(i).is_empty());
    let chips_height = u16::from(has_chips);

    let [header, search, chips, summary, list, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(chips_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    input::render_search_box(frame, &app.input, search, app.session.is_loading());
    if let Some(interpretation) = &app.session.interpretation {
        results::render_interpretation(frame, interpretation, chips);
    }
    results::render_summary(frame, app, summary);

    // The list is suppressed entirely while a request is in flight; the
    // summary line carries the loading message instead.
    if !app.session.is_loading() {
        results::render_results(frame, &app.session.trials, app.results.offset, list);
    }

    render_footer(frame, app, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "TrialSearch",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Clinical Trial Intelligence",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Enter search · ↑/↓ scroll · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  ·  {}", app.config.base_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
