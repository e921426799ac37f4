//! Pathviz Core Library
//!
//! Graph model and shortest-path computation for the pathviz CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
