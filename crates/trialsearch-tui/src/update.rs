//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is also where the search session's state machine lives:
//! Idle → Loading on a valid submit, Loading → Resolved/Failed on the
//! completion of the *most recent* request. Completions for superseded
//! requests are discarded — last submit wins, regardless of arrival order.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use trialsearch_core::client::SearchError;
use trialsearch_core::types::SearchResponse;

use crate::common::RequestId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{input, results};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.session.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SearchCompleted { id, result } => handle_search_completed(app, id, result),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            app.input.insert_str(&text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Enter => submit(app),
        KeyCode::Up => {
            app.results.scroll_up(1);
            vec![]
        }
        KeyCode::Down => {
            app.results.scroll_down(1, max_scroll_offset(app));
            vec![]
        }
        KeyCode::PageUp => {
            app.results.scroll_up(results::CARD_HEIGHT * 2);
            vec![]
        }
        KeyCode::PageDown => {
            let max = max_scroll_offset(app);
            app.results.scroll_down(results::CARD_HEIGHT * 2, max);
            vec![]
        }
        _ => {
            input::handle_key(&mut app.input, key);
            vec![]
        }
    }
}

/// Submit action: issues exactly one search request for the trimmed query.
///
/// Empty or whitespace-only input is a no-op — no request, no transition.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if app.input.is_blank() {
        return vec![];
    }
    let query = app.input.value().trim().to_string();
    let id = app.request_seq.next_id();
    app.session.begin(id);
    tracing::info!(request = id.0, %query, "submitting search");
    vec![UiEffect::Search { id, query }]
}

fn handle_search_completed(
    app: &mut AppState,
    id: RequestId,
    result: Result<SearchResponse, SearchError>,
) -> Vec<UiEffect> {
    // Only the response belonging to the most recent submit may mutate
    // session state.
    if !app.session.accept_if_latest(id) {
        tracing::debug!(request = id.0, "discarding stale search response");
        return vec![];
    }

    match result {
        Ok(response) => {
            tracing::info!(request = id.0, trials = response.trials.len(), "search resolved");
            app.results.reset();
            app.session.resolve(response);
        }
        Err(error) => {
            // Prior results stay on screen; the failure is diagnostic-only.
            tracing::warn!(request = id.0, %error, "search failed");
            app.session.fail();
        }
    }
    vec![]
}

fn max_scroll_offset(app: &AppState) -> usize {
    results::line_count(app.session.trials.len()).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use trialsearch_core::config::Config;
    use trialsearch_core::types::{Interpretation, TrialRecord};

    use super::*;
    use crate::state::SearchPhase;

    fn test_app() -> AppState {
        AppState::new(Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_query(app: &mut AppState, text: &str) {
        app.input.set_text(text);
    }

    fn response_with_trials(ids: &[&str]) -> SearchResponse {
        SearchResponse {
            trials: ids
                .iter()
                .map(|id| TrialRecord {
                    nct_id: (*id).to_string(),
                    ..Default::default()
                })
                .collect(),
            interpretation: Interpretation::new(),
        }
    }

    fn submitted_id(effects: &[UiEffect]) -> RequestId {
        match effects {
            [UiEffect::Search { id, .. }] => *id,
            other => panic!("expected a single Search effect, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_enters_loading_and_issues_one_request() {
        let mut app = test_app();
        type_query(&mut app, "phase 3 asthma");

        let effects = press(&mut app, KeyCode::Enter);

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Search { query, .. }] if query == "phase 3 asthma"
        ));
        assert_eq!(app.session.phase, SearchPhase::Loading);
    }

    #[test]
    fn test_query_is_trimmed_before_submission() {
        let mut app = test_app();
        type_query(&mut app, "  melanoma  ");

        let effects = press(&mut app, KeyCode::Enter);

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Search { query, .. }] if query == "melanoma"
        ));
    }

    #[test]
    fn test_blank_submit_is_a_noop() {
        let mut app = test_app();
        for text in ["", "   ", "\t "] {
            type_query(&mut app, text);
            let effects = press(&mut app, KeyCode::Enter);
            assert!(effects.is_empty());
            assert_eq!(app.session.phase, SearchPhase::Idle);
        }
    }

    #[test]
    fn test_successful_completion_resolves_session() {
        let mut app = test_app();
        type_query(&mut app, "asthma");
        let id = submitted_id(&press(&mut app, KeyCode::Enter));

        update(
            &mut app,
            UiEvent::SearchCompleted {
                id,
                result: Ok(response_with_trials(&["NCT1", "NCT2"])),
            },
        );

        assert_eq!(app.session.phase, SearchPhase::Resolved);
        assert_eq!(app.session.trials.len(), 2);
        assert!(app.session.has_searched());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = test_app();

        type_query(&mut app, "first");
        let first = submitted_id(&press(&mut app, KeyCode::Enter));
        type_query(&mut app, "second");
        let second = submitted_id(&press(&mut app, KeyCode::Enter));

        // The superseded response arrives last-but-one... and is ignored.
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id: first,
                result: Ok(response_with_trials(&["STALE"])),
            },
        );
        assert_eq!(app.session.phase, SearchPhase::Loading);
        assert!(app.session.trials.is_empty());

        update(
            &mut app,
            UiEvent::SearchCompleted {
                id: second,
                result: Ok(response_with_trials(&["FRESH"])),
            },
        );
        assert_eq!(app.session.phase, SearchPhase::Resolved);
        assert_eq!(app.session.trials[0].nct_id, "FRESH");
    }

    #[test]
    fn test_stale_response_arriving_after_resolution_is_discarded() {
        let mut app = test_app();

        type_query(&mut app, "first");
        let first = submitted_id(&press(&mut app, KeyCode::Enter));
        type_query(&mut app, "second");
        let second = submitted_id(&press(&mut app, KeyCode::Enter));

        update(
            &mut app,
            UiEvent::SearchCompleted {
                id: second,
                result: Ok(response_with_trials(&["FRESH"])),
            },
        );
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id: first,
                result: Ok(response_with_trials(&["STALE"])),
            },
        );

        assert_eq!(app.session.trials[0].nct_id, "FRESH");
    }

    #[test]
    fn test_failure_preserves_prior_results() {
        let mut app = test_app();

        type_query(&mut app, "asthma");
        let id = submitted_id(&press(&mut app, KeyCode::Enter));
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id,
                result: Ok(response_with_trials(&["NCT1"])),
            },
        );

        type_query(&mut app, "copd");
        let id = submitted_id(&press(&mut app, KeyCode::Enter));
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id,
                result: Err(SearchError::Server {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                }),
            },
        );

        assert_eq!(app.session.phase, SearchPhase::Failed);
        assert!(!app.session.is_loading());
        assert_eq!(app.session.trials.len(), 1);
        assert_eq!(app.session.trials[0].nct_id, "NCT1");
    }

    #[test]
    fn test_resubmit_from_failed_reenters_loading() {
        let mut app = test_app();

        type_query(&mut app, "asthma");
        let id = submitted_id(&press(&mut app, KeyCode::Enter));
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id,
                result: Err(SearchError::Server {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                }),
            },
        );
        assert_eq!(app.session.phase, SearchPhase::Failed);

        let effects = press(&mut app, KeyCode::Enter);
        assert_eq!(effects.len(), 1);
        assert_eq!(app.session.phase, SearchPhase::Loading);
    }

    #[test]
    fn test_resolve_resets_scroll() {
        let mut app = test_app();
        app.results.scroll_down(10, 100);

        type_query(&mut app, "asthma");
        let id = submitted_id(&press(&mut app, KeyCode::Enter));
        update(
            &mut app,
            UiEvent::SearchCompleted {
                id,
                result: Ok(response_with_trials(&["NCT1"])),
            },
        );

        assert_eq!(app.results.offset, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);

        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_typing_routes_to_input() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.input.value(), "ab");
    }
}
