//! Subcommand implementations.

pub mod ask;
pub mod chat;
pub mod dishes;
pub mod menu;
