use crate::catalog::Product;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_CATEGORY_LENGTH: usize = 3;

/// Logical tabs of the product editor.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Info,
    Tags,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Info, Section::Tags];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Info => "info",
            Section::Tags => "tags",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity recorded per editor section.
///
/// Only sections that were evaluated have an entry; an empty state is
/// vacuously valid.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidityState {
    sections: BTreeMap<Section, bool>,
}

impl ValidityState {
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn record(&mut self, section: Section, valid: bool) {
        self.sections.insert(section, valid);
    }

    /// Recorded result for the section, `None` if it was never evaluated.
    ///
    pub fn get(&self, section: Section) -> Option<bool> {
        self.sections.get(&section).copied()
    }

    pub fn all_valid(&self) -> bool {
        self.sections.values().all(|valid| *valid)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Evaluate every section against the product snapshot.
    ///
    pub fn evaluate(product: Option<&Product>) -> ValidityState {
        let mut state = ValidityState::default();
        state.record(Section::Info, product.map_or(false, info_is_valid));
        state.record(Section::Tags, product.map_or(false, tags_is_valid));
        state
    }
}

/// The info tab needs a name of at least three characters and a code.
///
pub fn info_is_valid(product: &Product) -> bool {
    product.product_name.chars().count() >= MIN_NAME_LENGTH && !product.product_code.is_empty()
}

/// The tags tab needs a category of at least three characters.
///
pub fn tags_is_valid(product: &Product) -> bool {
    product.category.chars().count() >= MIN_CATEGORY_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, code: &str, category: &str) -> Product {
        Product {
            id: 1,
            product_name: name.to_string(),
            product_code: code.to_string(),
            category: category.to_string(),
            ..Product::initialized()
        }
    }

    #[test]
    fn info_requires_name_and_code() {
        assert!(info_is_valid(&product("Saw", "TBX-1", "")));
        assert!(info_is_valid(&product("Garden Cart", "GDN-23", "")));
        assert!(!info_is_valid(&product("Sa", "TBX-1", "")));
        assert!(!info_is_valid(&product("", "TBX-1", "")));
        assert!(!info_is_valid(&product("Saw", "", "")));
    }

    #[test]
    fn name_length_counts_characters() {
        assert!(info_is_valid(&product("äöü", "X", "")));
        assert!(!info_is_valid(&product("äö", "X", "")));
    }

    #[test]
    fn tags_requires_category() {
        assert!(tags_is_valid(&product("", "", "Toolbox")));
        assert!(tags_is_valid(&product("", "", "abc")));
        assert!(!tags_is_valid(&product("", "", "ab")));
        assert!(!tags_is_valid(&product("", "", "")));
    }

    #[test]
    fn evaluate_records_each_section_under_its_own_key() {
        let state = ValidityState::evaluate(Some(&product("Gadget", "GDG-7", "ab")));
        assert_eq!(state.get(Section::Info), Some(true));
        assert_eq!(state.get(Section::Tags), Some(false));
        assert!(!state.all_valid());
    }

    #[test]
    fn evaluate_without_product_is_invalid() {
        let state = ValidityState::evaluate(None);
        assert_eq!(state.get(Section::Info), Some(false));
        assert_eq!(state.get(Section::Tags), Some(false));
    }

    #[test]
    fn empty_state_is_vacuously_valid() {
        let state = ValidityState::default();
        assert!(state.is_empty());
        assert!(state.all_valid());
        assert_eq!(state.get(Section::Info), None);
    }

    #[test]
    fn clear_forgets_results() {
        let mut state = ValidityState::default();
        state.record(Section::Tags, false);
        state.clear();
        assert_eq!(state.get(Section::Tags), None);
        assert!(state.all_valid());
    }

    #[test]
    fn section_names() {
        assert_eq!(Section::Info.to_string(), "info");
        assert_eq!(Section::Tags.as_str(), "tags");
        assert_eq!(Section::ALL.len(), 2);
    }
}
