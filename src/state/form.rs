//! Form editing state types.
//!
//! The editor's fields are grouped into the same sections that validation
//! reports on, so each tab can show its own validity.

use crate::catalog::Product;
use crate::products::Section;

/// Specifying edit form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EditField {
    Name,
    Code,
    Description,
    Category,
    Tags,
}

impl EditField {
    pub const ALL: [EditField; 5] = [
        EditField::Name,
        EditField::Code,
        EditField::Description,
        EditField::Category,
        EditField::Tags,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Code => "Code",
            EditField::Description => "Description",
            EditField::Category => "Category",
            EditField::Tags => "Tags",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            EditField::Name | EditField::Code | EditField::Description => Section::Info,
            EditField::Category | EditField::Tags => Section::Tags,
        }
    }

    pub fn fields_in(section: Section) -> impl Iterator<Item = EditField> {
        EditField::ALL.into_iter().filter(move |f| f.section() == section)
    }

    pub fn next(&self) -> EditField {
        let index = EditField::ALL.iter().position(|f| f == self).unwrap_or(0);
        EditField::ALL[(index + 1) % EditField::ALL.len()]
    }

    pub fn previous(&self) -> EditField {
        let index = EditField::ALL.iter().position(|f| f == self).unwrap_or(0);
        EditField::ALL[(index + EditField::ALL.len() - 1) % EditField::ALL.len()]
    }
}

/// Focus and raw input of the edit form.
///
/// Tags are typed as one comma-separated line and split into the product on
/// every keystroke.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub field: EditField,
    pub tags_input: String,
}

impl EditForm {
    pub fn for_product(product: Option<&Product>) -> Self {
        EditForm {
            field: EditField::Name,
            tags_input: product.map(|p| p.tags.join(", ")).unwrap_or_default(),
        }
    }

    pub fn section(&self) -> Section {
        self.field.section()
    }

    /// Current text of a field.
    ///
    pub fn value<'a>(&'a self, field: EditField, product: &'a Product) -> &'a str {
        match field {
            EditField::Name => &product.product_name,
            EditField::Code => &product.product_code,
            EditField::Description => product.description.as_deref().unwrap_or(""),
            EditField::Category => &product.category,
            EditField::Tags => &self.tags_input,
        }
    }

    pub fn push_char(&mut self, product: &mut Product, c: char) {
        self.edit(product, |text| text.push(c));
    }

    pub fn pop_char(&mut self, product: &mut Product) {
        self.edit(product, |text| {
            text.pop();
        });
    }

    fn edit<F: FnOnce(&mut String)>(&mut self, product: &mut Product, f: F) {
        match self.field {
            EditField::Name => f(&mut product.product_name),
            EditField::Code => f(&mut product.product_code),
            EditField::Description => {
                let description = product.description.get_or_insert_with(String::new);
                f(description);
                if description.is_empty() {
                    product.description = None;
                }
            }
            EditField::Category => f(&mut product.category),
            EditField::Tags => {
                f(&mut self.tags_input);
                product.tags = split_tags(&self.tags_input);
            }
        }
    }
}

fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(EditField::Name.next(), EditField::Code);
        assert_eq!(EditField::Tags.next(), EditField::Name);
        assert_eq!(EditField::Name.previous(), EditField::Tags);
    }

    #[test]
    fn fields_grouped_by_section() {
        let info: Vec<EditField> = EditField::fields_in(Section::Info).collect();
        assert_eq!(
            info,
            vec![EditField::Name, EditField::Code, EditField::Description]
        );
        let tags: Vec<EditField> = EditField::fields_in(Section::Tags).collect();
        assert_eq!(tags, vec![EditField::Category, EditField::Tags]);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut product = Product::initialized();
        let mut form = EditForm::for_product(Some(&product));
        for c in "Saw".chars() {
            form.push_char(&mut product, c);
        }
        form.pop_char(&mut product);
        assert_eq!(product.product_name, "Sa");

        form.field = EditField::Description;
        form.push_char(&mut product, 'x');
        assert_eq!(product.description.as_deref(), Some("x"));
        form.pop_char(&mut product);
        assert_eq!(product.description, None);
    }

    #[test]
    fn tags_are_split_on_commas() {
        let mut product = Product {
            tags: vec!["tools".to_string()],
            ..Product::initialized()
        };
        let mut form = EditForm::for_product(Some(&product));
        assert_eq!(form.tags_input, "tools");

        form.field = EditField::Tags;
        for c in ", saw, ".chars() {
            form.push_char(&mut product, c);
        }
        assert_eq!(product.tags, vec!["tools".to_string(), "saw".to_string()]);
        assert_eq!(form.value(EditField::Tags, &product), "tools, saw, ");
    }
}
