//! Typed, read-only product view over one raw record
//!
//! Every derived field is computed once at construction. The variant tag is
//! fixed for the product's lifetime; variant-specific fields live in an
//! `Extension` selected by the variant's family.

use std::sync::Arc;

use super::export::{Export, ExportValue};
use super::person::{PEOPLE_DELIMITER, Role, RoleSet};
use super::record::{RawRecord, fields};
use super::value::{LINE_BREAK, Value};
use super::variant::{Family, Variant};
use crate::modules::cataloguing::{BindingTable, Tags, classify, extraction, people};

/// Delimiter for categories and topics rendered as text
pub const TAG_DELIMITER: &str = ", ";

static EMPTY: Value = Value::Empty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub binding: Value,
    pub page_count: Value,
    pub antolin: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediumDetails {
    pub duration: Value,
}

/// Variant-specific fields, one shape per family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extension {
    Book(BookDetails),
    Medium(MediumDetails),
    Item,
}

#[derive(Debug, Clone)]
pub struct Product {
    variant: Variant,
    raw: Arc<RawRecord>,
    isbn: Value,
    ean: Value,
    title: Value,
    subtitle: Value,
    description: Value,
    retail_price: Value,
    release_year: Value,
    age: Value,
    publisher: Value,
    roles: RoleSet,
    tags: Tags,
    extension: Extension,
}

impl Product {
    /// Classify the record and build the matching product
    pub fn from_record(raw: impl Into<Arc<RawRecord>>) -> Self {
        let raw = raw.into();
        let variant = classify(&raw);
        Self::new(raw, variant)
    }

    /// Build with an explicit variant, using the bundled binding table
    pub fn new(raw: impl Into<Arc<RawRecord>>, variant: Variant) -> Self {
        Self::with_bindings(raw, variant, BindingTable::global())
    }

    pub fn with_bindings(
        raw: impl Into<Arc<RawRecord>>,
        variant: Variant,
        bindings: &BindingTable,
    ) -> Self {
        let raw: Arc<RawRecord> = raw.into();
        let field = |code: &str| Value::of(raw.get(code));

        let mut roles = people::extract_roles(&raw);
        if variant == Variant::Movie
            && extraction::suppresses_authors(raw.text(fields::AUTHOR_TITLE))
        {
            roles.set(Role::Author, Vec::new());
        }

        let age = match variant {
            Variant::Movie => extraction::fsk_age(raw.text(fields::SUBTITLE)),
            _ => field(fields::AGE),
        };

        let tags = Tags::from_record(&raw);

        let extension = match variant.family() {
            Family::Book => Extension::Book(BookDetails {
                binding: extraction::binding(raw.text(fields::BINDING), bindings),
                page_count: extraction::page_count(raw.text(fields::PHYSICAL)),
                antolin: extraction::antolin(&tags.topics),
            }),
            Family::Medium => Extension::Medium(MediumDetails {
                duration: extraction::duration(raw.text(fields::SUBTITLE)),
            }),
            Family::Item => Extension::Item,
        };

        let isbn = match raw.text(fields::ISBN) {
            Some(_) => field(fields::ISBN),
            None => field(fields::EAN),
        };

        Self {
            variant,
            isbn,
            ean: field(fields::EAN),
            title: field(fields::TITLE),
            subtitle: field(fields::SUBTITLE),
            description: field(fields::DESCRIPTION),
            retail_price: field(fields::RETAIL_PRICE),
            release_year: field(fields::RELEASE_YEAR),
            age,
            publisher: field(fields::PUBLISHER),
            roles,
            tags,
            extension,
            raw,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn family(&self) -> Family {
        self.variant.family()
    }

    pub fn is(&self, variant: Variant) -> bool {
        self.variant == variant
    }

    pub fn is_book(&self) -> bool {
        self.family() == Family::Book
    }

    pub fn is_media(&self) -> bool {
        self.family() == Family::Medium
    }

    pub fn is_item(&self) -> bool {
        self.family() == Family::Item
    }

    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    /// ISBN, falling back to the EAN
    pub fn isbn(&self) -> &Value {
        &self.isbn
    }

    pub fn ean(&self) -> &Value {
        &self.ean
    }

    pub fn title(&self) -> &Value {
        &self.title
    }

    pub fn subtitle(&self) -> &Value {
        &self.subtitle
    }

    pub fn description(&self) -> &Value {
        &self.description
    }

    pub fn retail_price(&self) -> &Value {
        &self.retail_price
    }

    pub fn release_year(&self) -> &Value {
        &self.release_year
    }

    pub fn age(&self) -> &Value {
        &self.age
    }

    pub fn publisher(&self) -> &Value {
        &self.publisher
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn get_role(&self, role: Role) -> Value {
        self.roles.get_role(role)
    }

    /// Role lookup by name; unknown names read as vacant
    pub fn role(&self, name: &str) -> Value {
        Role::from_name(name)
            .map(|role| self.roles.get_role(role))
            .unwrap_or_default()
    }

    /// Everybody involved as one display string
    pub fn people(&self, delimiter: &str) -> String {
        self.roles.render(delimiter)
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn categories(&self) -> Value {
        Value::from(self.tags.categories.clone())
    }

    pub fn topics(&self) -> Value {
        Value::from(self.tags.topics.clone())
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub fn binding(&self) -> &Value {
        match &self.extension {
            Extension::Book(book) => &book.binding,
            _ => &EMPTY,
        }
    }

    pub fn page_count(&self) -> &Value {
        match &self.extension {
            Extension::Book(book) => &book.page_count,
            _ => &EMPTY,
        }
    }

    pub fn antolin(&self) -> &Value {
        match &self.extension {
            Extension::Book(book) => &book.antolin,
            _ => &EMPTY,
        }
    }

    pub fn duration(&self) -> &Value {
        match &self.extension {
            Extension::Medium(medium) => &medium.duration,
            _ => &EMPTY,
        }
    }

    /// Roles carried by this variant's export schema
    pub fn schema_roles(&self) -> Vec<Role> {
        match self.family() {
            Family::Medium => Role::BASE.into_iter().chain(Role::MEDIA).collect(),
            Family::Book | Family::Item => Role::BASE.to_vec(),
        }
    }

    /// Canonical export: base keys, then the variant's own keys
    pub fn export(&self, as_array: bool) -> Export {
        let mut out = self.base_export(as_array);
        self.extend_export(&mut out, as_array);
        out
    }

    fn base_export(&self, as_array: bool) -> Export {
        let render =
            |value: &Value, delimiter: &str| ExportValue::render(value, as_array, delimiter);
        let mut out = Export::new();

        out.push("Titel", render(&self.title, LINE_BREAK));
        out.push("Untertitel", render(&self.subtitle, LINE_BREAK));
        out.push("Inhaltsbeschreibung", render(&self.description, LINE_BREAK));
        out.push("Preis", render(&self.retail_price, LINE_BREAK));
        out.push("Erscheinungsjahr", render(&self.release_year, LINE_BREAK));
        out.push("Altersempfehlung", render(&self.age, LINE_BREAK));

        for role in self.schema_roles() {
            out.push(
                role.export_key(),
                render(&self.roles.get_role(role), PEOPLE_DELIMITER),
            );
        }

        out.push("Kategorien", render(&self.categories(), TAG_DELIMITER));
        out.push("Themen", render(&self.topics(), TAG_DELIMITER));
        out
    }

    fn extend_export(&self, out: &mut Export, as_array: bool) {
        let render = |value: &Value| ExportValue::render(value, as_array, LINE_BREAK);

        match &self.extension {
            Extension::Book(book) => {
                out.push("Einband", render(&book.binding));
                out.push("Seitenzahl", render(&book.page_count));
                out.push("Antolin", render(&book.antolin));
            }
            Extension::Medium(medium) => {
                out.push("Dauer", render(&medium.duration));
            }
            Extension::Item => {}
        }
    }
}
