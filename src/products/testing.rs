//! Recording doubles for the component capabilities.

use crate::catalog::{CatalogError, Product};
use crate::services::{Confirm, MessageSink, Navigator, ProductService, Services};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Call received by [`MockCatalog`].
///
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetProducts,
    GetProduct(u32),
    Create(Product),
    Update(Product),
    Delete(u32),
}

/// Product service double that records calls and answers from fixtures.
///
#[derive(Default)]
pub struct MockCatalog {
    calls: Mutex<Vec<Call>>,
    products: Vec<Product>,
    failure: Option<String>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        MockCatalog {
            products,
            ..Self::default()
        }
    }

    /// Every call fails with a 500 carrying the message.
    ///
    pub fn failing(message: &str) -> Self {
        MockCatalog {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: Call, value: T) -> Result<T, CatalogError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(CatalogError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ProductService for MockCatalog {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.record(Call::GetProducts, self.products.clone())
    }

    async fn get_product(&self, id: u32) -> Result<Option<Product>, CatalogError> {
        let found = self.products.iter().find(|p| p.id == id).cloned();
        self.record(Call::GetProduct(id), found)
    }

    async fn create_product(&self, product: &Product) -> Result<Product, CatalogError> {
        let created = Product {
            id: 100,
            ..product.clone()
        };
        self.record(Call::Create(product.clone()), created)
    }

    async fn update_product(&self, product: &Product) -> Result<Product, CatalogError> {
        self.record(Call::Update(product.clone()), product.clone())
    }

    async fn delete_product(&self, id: u32) -> Result<(), CatalogError> {
        self.record(Call::Delete(id), ())
    }
}

#[derive(Default)]
pub struct RecordingMessages {
    texts: Mutex<Vec<String>>,
}

impl RecordingMessages {
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl MessageSink for RecordingMessages {
    fn add_message(&self, text: &str) {
        self.texts.lock().unwrap().push(text.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Vec<String>> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, segments: &[&str]) {
        let segments = segments.iter().map(|s| (*s).to_owned()).collect();
        self.routes.lock().unwrap().push(segments);
    }
}

/// Confirmation double that always gives the same answer.
///
pub struct FixedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        FixedConfirm {
            answer,
            asked: Mutex::new(vec![]),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_owned());
        self.answer
    }
}

/// All doubles for one test, kept typed so their records can be inspected.
///
pub struct Doubles {
    pub catalog: Arc<MockCatalog>,
    pub messages: Arc<RecordingMessages>,
    pub navigator: Arc<RecordingNavigator>,
    pub confirm: Arc<FixedConfirm>,
}

impl Doubles {
    pub fn new(catalog: MockCatalog, confirm: bool) -> Self {
        Doubles {
            catalog: Arc::new(catalog),
            messages: Arc::new(RecordingMessages::default()),
            navigator: Arc::new(RecordingNavigator::default()),
            confirm: Arc::new(FixedConfirm::new(confirm)),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            catalog: self.catalog.clone(),
            messages: self.messages.clone(),
            navigator: self.navigator.clone(),
            confirm: self.confirm.clone(),
        }
    }
}

pub fn product(id: u32, name: &str) -> Product {
    Product {
        id,
        product_name: name.to_owned(),
        product_code: format!("CODE-{}", id),
        category: "Garden".to_owned(),
        ..Product::initialized()
    }
}
