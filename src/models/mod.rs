pub mod collection;
pub mod export;
pub mod person;
pub mod product;
pub mod record;
pub mod value;
pub mod variant;

pub use collection::Collection;
pub use export::{Export, ExportValue};
pub use person::{Person, Role, RoleSet};
pub use product::{BookDetails, Extension, MediumDetails, Product};
pub use record::{RawField, RawRecord};
pub use value::Value;
pub use variant::{Family, Variant};
