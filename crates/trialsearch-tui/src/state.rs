//! Application state composition.
//!
//! The top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── input: InputState          (editable query text, cursor)
//! ├── session: SearchSession     (phase, interpretation, trials, active request)
//! ├── results: ResultsViewState  (scroll offset)
//! ├── request_seq: RequestSeq    (monotonic request id generator)
//! └── spinner_frame              (loading animation counter)
//! ```
//!
//! All mutation goes through the reducer in `update.rs`; the renderer only
//! reads.

use trialsearch_core::config::Config;
use trialsearch_core::types::{Interpretation, SearchResponse, TrialRecord};

use crate::common::{RequestId, RequestSeq};
use crate::input::InputState;
use crate::results::ResultsViewState;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// User input state (query text, cursor).
    pub input: InputState,
    /// Search session state (owned exclusively by the reducer).
    pub session: SearchSession,
    /// Results list view state (scroll).
    pub results: ResultsViewState,
    /// Request id sequence for submits.
    pub request_seq: RequestSeq,
    /// Spinner animation frame counter (advanced on tick while loading).
    pub spinner_frame: usize,
    /// Backend configuration (read-only after startup).
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            input: InputState::default(),
            session: SearchSession::default(),
            results: ResultsViewState::default(),
            request_seq: RequestSeq::default(),
            spinner_frame: 0,
            config,
        }
    }
}

/// Lifecycle of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request resolved successfully.
    Resolved,
    /// The latest request failed; prior results are still displayed.
    Failed,
}

/// Mutable session state for one page session.
///
/// `interpretation` and `trials` are only ever replaced together, by
/// `resolve`. A failed request leaves both untouched. `active` holds the id
/// of the most recently issued request; completions for any other id are
/// stale and must not mutate this state.
#[derive(Debug, Default)]
pub struct SearchSession {
    pub phase: SearchPhase,
    /// Last successful response's interpretation. `None` until a response
    /// arrives; an empty trial list with `Some` interpretation is a distinct,
    /// valid state.
    pub interpretation: Option<Interpretation>,
    /// Last successful response's result list.
    pub trials: Vec<TrialRecord>,
    active: Option<RequestId>,
}

impl SearchSession {
    /// True strictly between a submit and its resolution.
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// True once any response has been stored.
    pub fn has_searched(&self) -> bool {
        self.interpretation.is_some()
    }

    /// Enters `Loading` for a freshly issued request, superseding any
    /// in-flight one.
    pub fn begin(&mut self, id: RequestId) {
        self.active = Some(id);
        self.phase = SearchPhase::Loading;
    }

    /// Returns true if `id` belongs to the most recently issued request and
    /// clears it. A false return means the completion is stale.
    pub fn accept_if_latest(&mut self, id: RequestId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    /// Stores a successful response, replacing interpretation and trials
    /// atomically.
    pub fn resolve(&mut self, response: SearchResponse) {
        self.interpretation = Some(response.interpretation);
        self.trials = response.trials;
        self.phase = SearchPhase::Resolved;
    }

    /// Marks the session failed. Prior results are deliberately kept.
    pub fn fail(&mut self) {
        self.phase = SearchPhase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_are_distinct_from_no_search() {
        let mut session = SearchSession::default();
        assert!(!session.has_searched());

        session.resolve(SearchResponse {
            trials: Vec::new(),
            interpretation: Interpretation::new(),
        });
        assert!(session.has_searched());
        assert!(session.trials.is_empty());
    }

    #[test]
    fn test_accept_if_latest_rejects_superseded_ids() {
        let mut session = SearchSession::default();
        let mut seq = RequestSeq::default();

        let first = seq.next_id();
        session.begin(first);
        let second = seq.next_id();
        session.begin(second);

        assert!(!session.accept_if_latest(first));
        assert!(session.is_loading());
        assert!(session.accept_if_latest(second));
    }
}
