//! Product components.
//!
//! Each component owns the view data for one screen and talks to the outside
//! world only through the capabilities in [`crate::services`]:
//! - `ProductList`: fetched products with a name filter
//! - `ProductDetail`: read-only view driven by the `id` route parameter
//! - `ProductEdit`: tabbed editor with validation and save/delete
//! - `ProductResolver`: loads the editor's product before the view activates

mod detail;
mod edit;
mod list;
mod resolver;
mod validity;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::{subscribe, ProductDetail, ID_PARAM};
pub use edit::{ProductEdit, SAVE_PRECONDITION_MESSAGE};
pub use list::ProductList;
pub use resolver::{ProductResolved, ProductResolver};
pub use validity::{info_is_valid, tags_is_valid, Section, ValidityState};

/// Parse a product id taken from a route segment.
///
/// Returns the display message used by the views when the segment is not a
/// non-negative integer.
///
pub fn parse_id(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("Product id was not a number: {}", raw))
}
