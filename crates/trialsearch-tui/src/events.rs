//! UI event types.
//!
//! Events are the reducer's only input: discrete external happenings
//! (keystroke, tick, response arrival). Async search results arrive through
//! the runtime inbox as `SearchCompleted`.

use trialsearch_core::client::SearchError;
use trialsearch_core::types::SearchResponse;

use crate::common::RequestId;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic animation/housekeeping tick.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// A search request settled (success or failure).
    ///
    /// `id` identifies which submit this belongs to; the reducer discards
    /// the event if a newer submit has superseded it.
    SearchCompleted {
        id: RequestId,
        result: Result<SearchResponse, SearchError>,
    },
}
