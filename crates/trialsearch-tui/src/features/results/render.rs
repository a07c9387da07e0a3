//! Results feature view.
//!
//! All display values come from `trialsearch_core::project`; nothing here
//! derives its own fallbacks.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use trialsearch_core::project;
use trialsearch_core::types::{Interpretation, TrialRecord};

use crate::common::truncate_with_ellipsis;
use crate::state::AppState;

/// Rendered lines per trial card (content + separator).
pub const CARD_HEIGHT: usize = 5;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Total rendered line count for the card list (scroll bound).
pub fn line_count(trial_count: usize) -> usize {
    trial_count * CARD_HEIGHT
}

/// Renders the interpretation chip row.
///
/// Chips are pre-filtered by the projector: keys with null or empty values
/// never appear.
pub fn render_interpretation(frame: &mut Frame, interpretation: &Interpretation, area: Rect) {
    let chips = project::interpretation_chips(interpretation);
    if chips.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled(
        "Interpretation: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (i, (key, value)) in chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{key}: "),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            (*value).to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the summary line: loading message while a request is in flight,
/// otherwise the pluralized result count (or a hint before the first search).
pub fn render_summary(frame: &mut Frame, app: &AppState, area: Rect) {
    let line = if app.session.is_loading() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        Line::styled(
            format!("{spinner} {}", project::LOADING_MESSAGE),
            Style::default().fg(Color::Yellow),
        )
    } else if app.session.has_searched() {
        Line::styled(
            format!("Showing {}", project::result_count(app.session.trials.len())),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            "Type a query and press Enter",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the scrollable card list. Not rendered at all while loading
/// (the caller skips this pass).
pub fn render_results(frame: &mut Frame, trials: &[TrialRecord], offset: usize, area: Rect) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(line_count(trials.len()));
    for record in trials {
        push_card_lines(&mut lines, record, width);
    }

    // Clamp so the last card can always be scrolled into view.
    let max_offset = lines.len().saturating_sub(area.height as usize);
    let offset = offset.min(max_offset);

    let paragraph = Paragraph::new(Text::from(lines)).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn push_card_lines<'a>(lines: &mut Vec<Line<'a>>, record: &'a TrialRecord, width: usize) {
    let card = project::project(record);

    let status_style = if card.recruiting {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut header = vec![
        Span::styled(card.nct_id, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", card.phase),
            Style::default().fg(Color::Magenta),
        ),
    ];
    if let Some(status) = card.status {
        header.push(Span::raw("  "));
        header.push(Span::styled(status, status_style));
    }
    lines.push(Line::from(header));

    lines.push(Line::styled(
        truncate_with_ellipsis(card.title, width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    // Uniform card height keeps the scroll math trivial.
    let conditions = card.conditions.unwrap_or_default();
    lines.push(Line::styled(
        truncate_with_ellipsis(&conditions, width),
        Style::default().fg(Color::DarkGray),
    ));

    let mut sponsor_spans = vec![
        Span::styled("Lead: ", Style::default().fg(Color::Gray)),
        Span::raw(card.lead_sponsor.to_string()),
    ];
    if card.extra_sponsors > 0 {
        sponsor_spans.push(Span::styled(
            format!(" (+{})", card.extra_sponsors),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(sponsor_spans));

    lines.push(Line::raw(""));
}
