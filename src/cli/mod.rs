//! Command line interface for Concord.

pub mod args;
pub mod commands;
pub mod output;
