//! Query input feature: editable text, cursor movement, line editing.

mod render;
mod state;
mod update;

pub use render::render_search_box;
pub use state::InputState;
pub use update::handle_key;
