use super::parse_id;
use crate::catalog::Product;
use crate::services::ProductService;
use crate::state::ParamMap;
use log::*;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Route parameter carrying the product id.
pub const ID_PARAM: &str = "id";

const DEFAULT_TITLE: &str = "Product Detail";

/// Read-only product view driven by the `id` route parameter.
///
pub struct ProductDetail {
    page_title: String,
    product: Option<Product>,
    error_message: Option<String>,
    catalog: Arc<dyn ProductService>,
}

impl ProductDetail {
    pub fn new(catalog: Arc<dyn ProductService>) -> Self {
        ProductDetail {
            page_title: DEFAULT_TITLE.to_owned(),
            product: None,
            error_message: None,
            catalog,
        }
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Handle one emission of the route parameters.
    ///
    /// Each emission is a fresh navigation, so the previous error is dropped.
    ///
    pub async fn on_params(&mut self, params: &ParamMap) {
        self.error_message = None;
        let raw = params.get(ID_PARAM).unwrap_or_default();
        match parse_id(raw) {
            Ok(id) => self.fetch_and_render(id).await,
            Err(message) => {
                warn!("{}", message);
                self.error_message = Some(message);
            }
        }
    }

    /// Look the product up and derive the title from the result. A failed
    /// lookup keeps whatever product was shown before.
    ///
    pub async fn fetch_and_render(&mut self, id: u32) {
        debug!("Fetching product {} for detail view...", id);
        match self.catalog.get_product(id).await {
            Ok(product) => self.on_product_retrieved(product),
            Err(e) => {
                error!("Failed to fetch product {}: {}", id, e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn on_product_retrieved(&mut self, product: Option<Product>) {
        self.page_title = match &product {
            Some(p) => format!("Product Detail: {}", p.product_name),
            None => "No product found".to_owned(),
        };
        self.product = product;
    }
}

/// Feed every route parameter change into the detail view until the
/// parameter stream closes.
///
pub async fn subscribe(detail: Arc<Mutex<ProductDetail>>, mut params: watch::Receiver<ParamMap>) {
    debug!("Subscribed detail view to route parameters");
    while params.changed().await.is_ok() {
        let current = params.borrow_and_update().clone();
        detail.lock().await.on_params(&current).await;
    }
    debug!("Route parameter stream closed");
}
