//! Collection export to JSON and CSV
//!
//! CSV needs one header row for products of mixed variants, so the columns
//! are the union of all export keys in first-seen order.

use std::io::Write;

use crate::domain::DomainError;
use crate::models::{Collection, Export};
use crate::models::person::PEOPLE_DELIMITER;

/// Serialize every product's canonical export as a JSON array
pub fn to_json(collection: &Collection, as_array: bool) -> Result<String, DomainError> {
    let exports = collection.export(as_array);
    Ok(serde_json::to_string_pretty(&exports)?)
}

fn headers(exports: &[Export]) -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = Vec::new();
    for key in exports.iter().flat_map(Export::keys) {
        if !headers.contains(&key) {
            headers.push(key);
        }
    }
    headers
}

/// Write a CSV table, one row per product; absent columns are empty cells
pub fn write_csv<W: Write>(collection: &Collection, writer: W) -> Result<(), DomainError> {
    let exports = collection.export(false);
    let headers = headers(&exports);

    let mut wtr = csv::Writer::from_writer(writer);
    if headers.is_empty() {
        return Ok(());
    }
    wtr.write_record(&headers)?;

    for export in &exports {
        let row: Vec<String> = headers
            .iter()
            .map(|key| {
                export
                    .get(key)
                    .map(|value| value.as_text(PEOPLE_DELIMITER))
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    tracing::debug!(
        "Wrote CSV with {} rows and {} columns",
        exports.len(),
        headers.len()
    );
    Ok(())
}

pub fn to_csv_string(collection: &Collection) -> Result<String, DomainError> {
    let mut buffer = Vec::new();
    write_csv(collection, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| DomainError::Internal(format!("CSV is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::fields;
    use crate::models::{Product, RawRecord, Variant};

    fn mixed_collection() -> Collection {
        Collection::new(vec![
            Product::new(
                RawRecord::new()
                    .with(fields::TITLE, "Der Grüffelo")
                    .with(fields::PHYSICAL, "32 S. 28 cm"),
                Variant::Hardcover,
            ),
            Product::new(
                RawRecord::new()
                    .with(fields::TITLE, "Der Grüffelo, Hörspiel")
                    .with(fields::SUBTITLE, "Hörspiel. 25 Min."),
                Variant::Audiobook,
            ),
        ])
    }

    #[test]
    fn csv_uses_union_of_headers() {
        let csv = to_csv_string(&mixed_collection()).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();

        assert!(header.starts_with("Titel,Untertitel"));
        assert!(header.contains("Seitenzahl"));
        assert!(header.ends_with("Dauer"));

        let book = lines.next().unwrap();
        assert!(book.starts_with("Der Grüffelo,"));
        assert!(book.contains(",32,"));
        assert!(book.ends_with(','));

        let audio = lines.next().unwrap();
        assert!(audio.ends_with(",25"));
    }

    #[test]
    fn json_keeps_export_order() {
        let json = to_json(&mixed_collection(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["Seitenzahl"], serde_json::json!(["32"]));
        assert_eq!(parsed[1]["Dauer"], serde_json::json!(["25"]));

        let titel = json.find("\"Titel\"").unwrap();
        let themen = json.find("\"Themen\"").unwrap();
        assert!(titel < themen);
    }

    #[test]
    fn empty_collection_exports_nothing() {
        let csv = to_csv_string(&Collection::default()).unwrap();
        assert_eq!(csv.trim(), "");
        assert_eq!(to_json(&Collection::default(), false).unwrap(), "[]");
    }
}
