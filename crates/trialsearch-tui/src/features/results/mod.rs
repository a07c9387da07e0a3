//! Results feature: interpretation chips, count summary, trial cards.

mod render;
mod state;

pub use render::{
    CARD_HEIGHT, line_count, render_interpretation, render_results, render_summary,
};
pub use state::ResultsViewState;
