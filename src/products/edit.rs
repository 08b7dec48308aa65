use super::{ProductResolved, Section, ValidityState};
use crate::catalog::Product;
use crate::services::Services;
use log::*;

/// Error shown when saving with no product loaded.
pub const SAVE_PRECONDITION_MESSAGE: &str = "Please correct the validation errors.";

const LIST_ROUTE: &[&str] = &["/products"];
const DEFAULT_TITLE: &str = "Product Edit";
const DELETED_FALLBACK_NAME: &str = "Product";

/// Tabbed product editor with validation and save/delete orchestration.
///
/// Successful mutations always end with a message and a navigation back to
/// the product list. Failures only set the displayed error.
///
pub struct ProductEdit {
    page_title: String,
    error_message: Option<String>,
    product: Option<Product>,
    validity: ValidityState,
    services: Services,
}

impl ProductEdit {
    pub fn new(services: Services) -> Self {
        ProductEdit {
            page_title: DEFAULT_TITLE.to_owned(),
            error_message: None,
            product: None,
            validity: ValidityState::default(),
            services,
        }
    }

    /// Take over the data loaded by the resolver.
    ///
    pub fn init(&mut self, resolved: ProductResolved) {
        self.error_message = resolved.error;
        self.on_product_retrieved(resolved.product);
    }

    pub fn on_product_retrieved(&mut self, product: Option<Product>) {
        self.page_title = match &product {
            None => "No product found".to_owned(),
            Some(p) if p.is_new() => "Add Product".to_owned(),
            Some(p) => format!("Edit Product: {}", p.product_name),
        };
        self.product = product;
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn product_mut(&mut self) -> Option<&mut Product> {
        self.product.as_mut()
    }

    /// Recompute every section from the current product.
    ///
    pub fn validate(&mut self) {
        self.validity.clear();
        self.validity = ValidityState::evaluate(self.product.as_ref());
    }

    /// Whether every recorded section is valid, after a fresh validation.
    ///
    pub fn is_valid(&mut self) -> bool {
        self.validate();
        self.validity.all_valid()
    }

    /// Validity of one section after a fresh validation, `None` if the
    /// section has no recorded result.
    ///
    pub fn is_section_valid(&mut self, section: Section) -> Option<bool> {
        self.validate();
        self.validity.get(section)
    }

    /// Create or update the product depending on whether it was saved before.
    ///
    pub async fn save_product(&mut self) {
        let product = match &self.product {
            Some(product) => product.clone(),
            None => {
                warn!("Save requested without a product loaded");
                self.error_message = Some(SAVE_PRECONDITION_MESSAGE.to_owned());
                return;
            }
        };

        if product.is_new() {
            info!("Creating product '{}'...", product.product_name);
            match self.services.catalog.create_product(&product).await {
                Ok(_) => self.on_save_complete(&format!(
                    "The new {} was saved",
                    product.product_name
                )),
                Err(e) => self.on_error(e),
            }
        } else {
            info!("Updating product {}...", product.id);
            match self.services.catalog.update_product(&product).await {
                Ok(_) => self.on_save_complete(&format!(
                    "The updated {} was saved",
                    product.product_name
                )),
                Err(e) => self.on_error(e),
            }
        }
    }

    /// Delete the product, asking first if it exists on the service.
    ///
    pub async fn delete_product(&mut self) {
        let (id, name) = match &self.product {
            Some(product) if !product.is_new() => (product.id, product.product_name.clone()),
            other => {
                // Never saved, nothing to delete remotely.
                let name = other
                    .as_ref()
                    .map(|p| p.product_name.clone())
                    .unwrap_or_else(|| DELETED_FALLBACK_NAME.to_owned());
                self.on_save_complete(&format!("{} was deleted", name));
                return;
            }
        };

        let question = format!("Really delete the product: {}?", name);
        if !self.services.confirm.confirm(&question) {
            debug!("Deletion of product {} declined", id);
            return;
        }

        info!("Deleting product {}...", id);
        match self.services.catalog.delete_product(id).await {
            Ok(()) => self.on_save_complete(&format!("{} was deleted", name)),
            Err(e) => self.on_error(e),
        }
    }

    fn on_save_complete(&self, message: &str) {
        self.services.messages.add_message(message);
        self.services.navigator.navigate(LIST_ROUTE);
    }

    fn on_error(&mut self, error: crate::catalog::CatalogError) {
        error!("Product request failed: {}", error);
        self.error_message = Some(error.to_string());
    }
}
