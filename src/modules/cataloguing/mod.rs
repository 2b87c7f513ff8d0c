// Cataloguing Module
// Handles classification, people/tag extraction and variant field heuristics

pub mod bindings;
pub mod classification;
pub mod extraction;
pub mod people;
pub mod tags;

pub use bindings::BindingTable;
pub use classification::classify;
pub use tags::Tags;
