//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the router and the mounted components
//! - Navigation types (View, Route, ParamMap)
//! - Form editing types (EditField, EditForm)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{EditField, EditForm};
pub use navigation::{ParamMap, Route, View};
pub use state_impl::State;
