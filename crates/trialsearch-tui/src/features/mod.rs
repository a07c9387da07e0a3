pub mod input;
pub mod results;
