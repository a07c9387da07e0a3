//! Core trialsearch library (wire types, search client, config, projection).

pub mod client;
pub mod config;
pub mod project;
pub mod types;
