//! Command implementations for pathviz

pub mod dispatch;
pub mod helpers;
pub mod path;
pub mod random;
pub mod show;
pub mod trace;
