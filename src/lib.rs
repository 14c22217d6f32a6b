//! mindtrack - Terminal growth mindset tracker
//!
//! An interactive shell for logging journal entries, tracking goals and daily
//! habit streaks, and browsing motivational quotes. All state lives in an
//! in-memory session for the lifetime of one shell run; nothing is persisted.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MindtrackError;
