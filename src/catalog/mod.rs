mod client;
mod error;
mod resource;

pub use error::CatalogError;
pub use resource::*;

use crate::services::ProductService;
use async_trait::async_trait;
use client::Client;
use log::*;
use reqwest::Method;

const PRODUCTS_ENDPOINT: &str = "products";

/// Responsible for asynchronous interaction with the product service,
/// including transformation of response data into explicitly-defined types.
///
pub struct Catalog {
    client: Client,
}

impl Catalog {
    /// Returns a new instance for the given service URL and optional token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> Catalog {
        debug!("Initializing catalog client for {}...", base_url);
        Catalog {
            client: Client::new(base_url, access_token),
        }
    }
}

#[async_trait]
impl ProductService for Catalog {
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Requesting all products...");
        let products: Option<Vec<Product>> = self.client.get(PRODUCTS_ENDPOINT).await?;
        let products = products.unwrap_or_default();
        debug!("Retrieved {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: u32) -> Result<Option<Product>, CatalogError> {
        if id == 0 {
            debug!("Returning initialized product for id 0");
            return Ok(Some(Product::initialized()));
        }
        debug!("Requesting product {}...", id);
        self.client
            .get(&format!("{}/{}", PRODUCTS_ENDPOINT, id))
            .await
    }

    async fn create_product(&self, product: &Product) -> Result<Product, CatalogError> {
        debug!("Creating product '{}'...", product.product_name);
        // The service assigns the id.
        let mut body = serde_json::to_value(product)?;
        body["id"] = serde_json::Value::Null;
        self.client
            .send::<Product, _>(Method::POST, PRODUCTS_ENDPOINT, &body)
            .await?
            .ok_or_else(|| CatalogError::EmptyResponse {
                endpoint: PRODUCTS_ENDPOINT.to_owned(),
            })
    }

    async fn update_product(&self, product: &Product) -> Result<Product, CatalogError> {
        debug!("Updating product {}...", product.id);
        let updated = self
            .client
            .send::<Product, _>(
                Method::PUT,
                &format!("{}/{}", PRODUCTS_ENDPOINT, product.id),
                product,
            )
            .await?;
        Ok(updated.unwrap_or_else(|| product.clone()))
    }

    async fn delete_product(&self, id: u32) -> Result<(), CatalogError> {
        debug!("Deleting product {}...", id);
        self.client
            .delete(&format!("{}/{}", PRODUCTS_ENDPOINT, id))
            .await
    }
}
