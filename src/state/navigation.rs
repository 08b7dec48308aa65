//! Routing types.
//!
//! Routes are parsed from path segments the way the components request
//! them, e.g. `["/products", "3", "edit"]`.

use std::collections::HashMap;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Welcome,
    ProductList,
    ProductDetail,
    ProductEdit,
    PageNotFound,
}

/// Destination resolved from path segments.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Route {
    Welcome,
    ProductList,
    ProductDetail { id: String },
    ProductEdit { id: String },
    PageNotFound,
}

impl Route {
    /// Parse path segments into a route. Slashes inside segments are split
    /// and empty pieces dropped, so `["/products/3"]` equals `["products", "3"]`.
    ///
    pub fn parse<S: AsRef<str>>(segments: &[S]) -> Route {
        let parts: Vec<&str> = segments
            .iter()
            .flat_map(|s| s.as_ref().split('/'))
            .filter(|s| !s.is_empty())
            .collect();
        match parts.as_slice() {
            [] | ["welcome"] => Route::Welcome,
            ["products"] => Route::ProductList,
            ["products", id] => Route::ProductDetail {
                id: (*id).to_owned(),
            },
            ["products", id, "edit"] => Route::ProductEdit {
                id: (*id).to_owned(),
            },
            _ => Route::PageNotFound,
        }
    }

    pub fn view(&self) -> View {
        match self {
            Route::Welcome => View::Welcome,
            Route::ProductList => View::ProductList,
            Route::ProductDetail { .. } => View::ProductDetail,
            Route::ProductEdit { .. } => View::ProductEdit,
            Route::PageNotFound => View::PageNotFound,
        }
    }
}

/// Parameters extracted from the active route.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamMap(HashMap<String, String>);

impl ParamMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ParamMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        ParamMap(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }
}
