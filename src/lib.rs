//! Transcript quality scoring: heuristic checks, a score in [0, 1], and a routing decision per row.

pub mod config;
pub mod output;
pub mod scoring;
pub mod table;
