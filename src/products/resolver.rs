use super::parse_id;
use crate::catalog::Product;
use crate::services::ProductService;
use log::*;
use std::sync::Arc;

/// Data handed to the editor once its route has been resolved.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductResolved {
    pub product: Option<Product>,
    pub error: Option<String>,
}

/// Loads the product for the edit route before the editor activates.
///
/// Failures are folded into [`ProductResolved::error`] so the editor always
/// activates.
///
pub struct ProductResolver {
    catalog: Arc<dyn ProductService>,
}

impl ProductResolver {
    pub fn new(catalog: Arc<dyn ProductService>) -> Self {
        ProductResolver { catalog }
    }

    pub async fn resolve(&self, raw_id: &str) -> ProductResolved {
        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(message) => {
                warn!("{}", message);
                return ProductResolved {
                    product: None,
                    error: Some(message),
                };
            }
        };

        debug!("Resolving product {} for the editor...", id);
        match self.catalog.get_product(id).await {
            Ok(product) => ProductResolved {
                product,
                error: None,
            },
            Err(e) => {
                error!("Failed to resolve product {}: {}", id, e);
                ProductResolved {
                    product: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::testing::{product, Call, MockCatalog};

    #[tokio::test]
    async fn resolves_existing_product() {
        let catalog = Arc::new(MockCatalog::with_products(vec![product(4, "Hammer")]));
        let resolved = ProductResolver::new(catalog.clone()).resolve("4").await;
        assert_eq!(
            resolved,
            ProductResolved {
                product: Some(product(4, "Hammer")),
                error: None,
            }
        );
        assert_eq!(catalog.calls(), vec![Call::GetProduct(4)]);
    }

    #[tokio::test]
    async fn not_a_number() {
        let catalog = Arc::new(MockCatalog::new());
        let resolved = ProductResolver::new(catalog.clone()).resolve("new").await;
        assert_eq!(resolved.product, None);
        assert_eq!(
            resolved.error.as_deref(),
            Some("Product id was not a number: new")
        );
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn service_error_is_folded_in() {
        let catalog = Arc::new(MockCatalog::failing("unreachable"));
        let resolved = ProductResolver::new(catalog).resolve("4").await;
        assert_eq!(resolved.product, None);
        assert_eq!(
            resolved.error.as_deref(),
            Some("Server returned code: 500, error message is: unreachable")
        );
    }

    #[tokio::test]
    async fn missing_product_is_not_an_error() {
        let resolved = ProductResolver::new(Arc::new(MockCatalog::new()))
            .resolve("9")
            .await;
        assert_eq!(resolved, ProductResolved::default());
    }
}
