use fake::Dummy;
use serde::{Deserialize, Deserializer, Serialize};

/// Defines product data structure as exchanged with the product service.
///
/// An `id` of 0 marks a product that has not been persisted yet.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub release_date: Option<String>, // ISO date string
    pub price: Option<f64>,
    pub description: Option<String>,
    pub star_rating: Option<f64>,
    pub image_url: Option<String>,
}

/// Treat an explicit JSON `null` like a missing field.
///
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Return a blank product ready to be filled in by the editor.
    ///
    pub fn initialized() -> Product {
        Product::default()
    }

    /// Whether the product has never been saved to the service.
    ///
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}
