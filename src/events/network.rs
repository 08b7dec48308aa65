use crate::products::{ProductEdit, ProductResolver};
use crate::services::Services;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GetProducts,
    ResolveProduct { id: String },
    SaveProduct,
    DeleteProduct,
}

/// Specify struct for managing state with network events.
///
pub struct Handler {
    state: Arc<Mutex<State>>,
    services: Services,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: Arc<Mutex<State>>, services: Services) -> Self {
        Handler { state, services }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::GetProducts => self.get_products().await?,
            Event::ResolveProduct { id } => self.resolve_product(id).await?,
            Event::SaveProduct => self.save_product().await?,
            Event::DeleteProduct => self.delete_product().await?,
        }
        Ok(())
    }

    /// Update state with every product in the catalog.
    ///
    async fn get_products(&mut self) -> Result<()> {
        info!("Fetching products...");
        let result = self.services.catalog.get_products().await;
        let mut state = self.state.lock().await;
        state.get_product_list_mut().on_products_retrieved(result);
        Ok(())
    }

    /// Resolve the product for the edit route, then mount a fresh editor if
    /// the route is still pending.
    ///
    async fn resolve_product(&mut self, id: String) -> Result<()> {
        info!("Resolving product '{}' for editing...", id);
        let resolver = ProductResolver::new(self.services.catalog.clone());
        let resolved = resolver.resolve(&id).await;
        if let Some(error) = &resolved.error {
            warn!("Product '{}' resolved with error: {}", id, error);
        }
        let mut editor = ProductEdit::new(self.services.clone());
        editor.init(resolved);
        if !self.state.lock().await.activate_editor(&id, editor) {
            info!("Edit of product '{}' was cancelled", id);
        }
        Ok(())
    }

    async fn save_product(&mut self) -> Result<()> {
        let editor = self.state.lock().await.editor_handle()?;
        let mut editor = editor.lock().await;
        editor.save_product().await;
        Ok(())
    }

    async fn delete_product(&mut self) -> Result<()> {
        let editor = self.state.lock().await.editor_handle()?;
        let mut editor = editor.lock().await;
        editor.delete_product().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::testing::{product, Call, Doubles, MockCatalog};
    use crate::state::{StateError, View};

    fn handler(doubles: &Doubles) -> (Handler, Arc<Mutex<State>>) {
        let state = Arc::new(Mutex::new(State::default()));
        (Handler::new(state.clone(), doubles.services()), state)
    }

    async fn resolve(handler: &mut Handler, state: &Arc<Mutex<State>>, id: &str) -> Result<()> {
        state.lock().await.navigate(&["/products", id, "edit"]);
        handler
            .handle(Event::ResolveProduct { id: id.to_string() })
            .await
    }

    #[tokio::test]
    async fn get_products_fills_list() -> Result<()> {
        let doubles = Doubles::new(
            MockCatalog::with_products(vec![product(1, "Leaf Rake"), product(2, "Hammer")]),
            true,
        );
        let (mut handler, state) = handler(&doubles);
        state.lock().await.get_product_list_mut().set_loading();

        handler.handle(Event::GetProducts).await?;

        let state = state.lock().await;
        assert!(!state.get_product_list().is_loading());
        assert_eq!(state.get_product_list().filtered().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn resolve_product_mounts_editor() -> Result<()> {
        let doubles = Doubles::new(MockCatalog::with_products(vec![product(2, "Hammer")]), true);
        let (mut handler, state) = handler(&doubles);

        resolve(&mut handler, &state, "2").await?;

        let state = state.lock().await;
        assert_eq!(state.current_view(), View::ProductEdit);
        let editor = state.editor_handle()?;
        let editor = editor.lock().await;
        assert_eq!(editor.page_title(), "Edit Product: Hammer");
        assert_eq!(doubles.catalog.calls(), vec![Call::GetProduct(2)]);
        Ok(())
    }

    #[tokio::test]
    async fn resolve_bad_id_shows_error() -> Result<()> {
        let doubles = Doubles::new(MockCatalog::new(), true);
        let (mut handler, state) = handler(&doubles);

        resolve(&mut handler, &state, "abc").await?;

        let editor = state.lock().await.editor_handle()?;
        let editor = editor.lock().await;
        assert_eq!(editor.page_title(), "No product found");
        assert_eq!(
            editor.error_message(),
            Some("Product id was not a number: abc")
        );
        assert!(doubles.catalog.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn resolve_after_leaving_route_mounts_nothing() -> Result<()> {
        let doubles = Doubles::new(MockCatalog::with_products(vec![product(2, "Hammer")]), true);
        let (mut handler, state) = handler(&doubles);
        {
            let mut state = state.lock().await;
            state.navigate(&["/products", "2", "edit"]);
            state.navigate(&["/products"]);
        }

        handler
            .handle(Event::ResolveProduct { id: "2".to_string() })
            .await?;

        let state = state.lock().await;
        assert_eq!(state.current_view(), View::ProductList);
        assert!(!state.is_resolving());
        assert!(state.get_product_edit().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_product_updates_and_navigates() -> Result<()> {
        let doubles = Doubles::new(MockCatalog::with_products(vec![product(2, "Hammer")]), true);
        let (mut handler, state) = handler(&doubles);

        resolve(&mut handler, &state, "2").await?;
        handler.handle(Event::SaveProduct).await?;

        assert_eq!(
            doubles.catalog.calls(),
            vec![Call::GetProduct(2), Call::Update(product(2, "Hammer"))]
        );
        assert_eq!(doubles.messages.texts(), vec!["The updated Hammer was saved"]);
        assert_eq!(doubles.navigator.routes(), vec![vec!["/products".to_string()]]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_without_editor_fails() {
        let doubles = Doubles::new(MockCatalog::new(), true);
        let (mut handler, _state) = handler(&doubles);

        let error = handler.handle(Event::DeleteProduct).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StateError>(),
            Some(StateError::EditorNotActive)
        ));
        assert!(doubles.catalog.calls().is_empty());
    }
}
