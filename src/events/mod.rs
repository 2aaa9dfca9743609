//! Event handling module.
//!
//! Terminal events (key presses and ticks) are polled here and translated
//! into controller events.

pub mod terminal;
