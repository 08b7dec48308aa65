//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: product service calls run off the UI thread
//! - Terminal events: key presses and render ticks

pub mod network;
pub mod terminal;
