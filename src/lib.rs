//! Terminal front-end for managing a product catalog.
//!
//! The crate is split into:
//! - `catalog`: HTTP access to the remote product service
//! - `products`: the list, detail and edit components with their validation rules
//! - `services`: capability traits the components depend on, plus the app's implementations
//! - `state`, `events`, `ui`: the terminal app hosting the components

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod products;
pub mod services;
pub mod state;
pub mod ui;
