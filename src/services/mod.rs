//! Capabilities the product components depend on.
//!
//! Components receive these as `Arc<dyn _>` references at construction so the
//! terminal app and the tests can each supply their own implementations:
//! - `ProductService`: remote data access
//! - `Navigator`: route changes
//! - `MessageSink`: user-facing notifications
//! - `Confirm`: blocking yes/no prompts

mod confirm;
mod messages;
mod navigation;

pub use confirm::{ConfirmPrompt, ConfirmReceiver, ModalConfirm};
pub use messages::{Message, MessageService};
pub use navigation::{ChannelNavigator, NavigationReceiver};

use crate::catalog::{CatalogError, Product};
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous access to the remote product collection.
///
/// A lookup that finds nothing is a success with `None`, not an error.
///
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError>;
    async fn get_product(&self, id: u32) -> Result<Option<Product>, CatalogError>;
    async fn create_product(&self, product: &Product) -> Result<Product, CatalogError>;
    async fn update_product(&self, product: &Product) -> Result<Product, CatalogError>;
    async fn delete_product(&self, id: u32) -> Result<(), CatalogError>;
}

/// Fire-and-forget route changes, given as path segments.
///
pub trait Navigator: Send + Sync {
    fn navigate(&self, segments: &[&str]);
}

/// Fire-and-forget notification sink.
///
pub trait MessageSink: Send + Sync {
    fn add_message(&self, text: &str);
}

/// Synchronous yes/no question put to the user.
///
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Bundle of collaborators handed to components that need all of them.
///
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn ProductService>,
    pub messages: Arc<dyn MessageSink>,
    pub navigator: Arc<dyn Navigator>,
    pub confirm: Arc<dyn Confirm>,
}
