pub mod request;
pub mod text;

pub use request::{RequestId, RequestSeq};
pub use text::truncate_with_ellipsis;
