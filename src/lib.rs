//! Terminal chat and task widget for a task assistant backend.
//!
//! The interaction core (input gating, submission lifecycle, typing animation
//! and task list coordination) lives in [`controller`] and talks to the screen
//! only through the traits in [`view`], so it runs without a terminal.

pub mod animator;
pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod gate;
pub mod logger;
pub mod state;
pub mod ui;
pub mod view;
