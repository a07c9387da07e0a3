//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs
//! I/O or spawns tasks directly.

use crate::common::RequestId;

#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
    /// Issue one search request for the trimmed query.
    ///
    /// Exactly one outbound request per submit; no retry. There is no
    /// cancellation signal for superseded requests — stale completions are
    /// suppressed on arrival instead.
    Search { id: RequestId, query: String },
}
