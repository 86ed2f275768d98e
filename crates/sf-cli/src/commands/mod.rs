//! Command implementations

pub mod ls;
pub mod run;
