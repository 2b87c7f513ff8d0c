use bibliogenius_catalog::models::person::{PEOPLE_DELIMITER, Person, RoleSet};
use bibliogenius_catalog::models::record::fields;
use bibliogenius_catalog::{ExportValue, Product, RawRecord, Role, Value, Variant, classify};

// Helper: one fixture per family plus a few awkward ones
fn fixtures() -> Vec<RawRecord> {
    vec![
        RawRecord::new(),
        RawRecord::new()
            .with(fields::ISBN, "978-3-551-55167-4")
            .with(fields::TITLE, "Ronja Räubertochter")
            .with(fields::SEGMENT, "HC")
            .with(fields::BINDING, "GEB")
            .with(fields::PHYSICAL, "1. Auflage 2021. 48 S. durchgehend farbig illustriert 28 cm")
            .with(fields::AUTHORS, vec!["Lindgren, Astrid"])
            .with(fields::PARTICIPANTS, "Illustration: Wikland, Ilon")
            .with(fields::KEYWORDS, vec!["Kinderbuch; Mut", "Antolin (3. Klasse)"])
            .with(fields::DESCRIPTION, vec!["Erster Absatz", "Zweiter Absatz"]),
        RawRecord::new()
            .with(fields::EAN, "4006680077844")
            .with(fields::SEGMENT, "AV")
            .with(fields::AUTHOR_TITLE, "Ronja Räubertochter DVD")
            .with(fields::AUTHORS, "Lindgren, Astrid")
            .with(
                fields::PARTICIPANTS,
                "Regie: Danielsson, Tage. Darsteller: Lundin, Hanna; Lindberg, Dan",
            )
            .with(fields::SUBTITLE, "Spielfilm. FSK ab 6 freigegeben. 121 Min."),
        RawRecord::new()
            .with(fields::BINDING, "CD")
            .with(fields::SEGMENT, "TB")
            .with(fields::SUBTITLE, "104 Min."),
        RawRecord::new()
            .with(fields::SEGMENT, "KA")
            .with(fields::TITLE, "Wandkalender 2027"),
        RawRecord::new()
            .with(fields::PRODUCT_GROUP, "4540")
            .with(fields::BINDING, "???"),
    ]
}

#[test]
fn test_export_representations_share_keys() {
    for raw in fixtures() {
        let product = Product::from_record(raw);
        let text: Vec<_> = product.export(false).keys().collect();
        let list: Vec<_> = product.export(true).keys().collect();
        assert_eq!(text, list, "key mismatch for {:?}", product.variant());
    }
}

#[test]
fn test_export_is_idempotent() {
    for raw in fixtures() {
        let product = Product::from_record(raw);
        let first = serde_json::to_string(&product.export(false)).unwrap();
        let second = serde_json::to_string(&product.export(false)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_classification_is_total_and_stable() {
    let variants: Vec<Variant> = fixtures().iter().map(classify).collect();
    assert_eq!(
        variants,
        vec![
            Variant::Item,
            Variant::Hardcover,
            Variant::Movie,
            Variant::Sound,
            Variant::Calendar,
            Variant::Medium,
        ]
    );
    for raw in fixtures() {
        assert_eq!(classify(&raw), classify(&raw.clone()));
    }
}

#[test]
fn test_value_array_lengths() {
    let raw = fixtures().remove(1);
    let product = Product::from_record(raw);
    assert_eq!(product.title().to_array().len(), 1);
    assert_eq!(product.description().to_array().len(), 2);
    assert_eq!(product.subtitle().to_array().len(), 0);
    assert_eq!(Value::Empty.to_array().len(), 0);
}

#[test]
fn test_role_rendering() {
    let john = Person::new("John", "Doe");
    let set: RoleSet = [
        (Role::Illustrator, vec![john.clone()]),
        (Role::Participant, vec![john, Person::new("Jane", "Done")]),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.get_role(Role::Illustrator).join(PEOPLE_DELIMITER), "John Doe");
    assert_eq!(
        set.render(PEOPLE_DELIMITER),
        "Illustration: John Doe. Mitarbeit: John Doe; Jane Done"
    );
}

#[test]
fn test_book_export_values() {
    let product = Product::from_record(fixtures().remove(1));
    let export = product.export(false);

    assert_eq!(export.get("Titel"), Some(&ExportValue::Text("Ronja Räubertochter".into())));
    assert_eq!(
        export.get("Inhaltsbeschreibung"),
        Some(&ExportValue::Text("Erster Absatz\nZweiter Absatz".into()))
    );
    assert_eq!(export.get("AutorIn"), Some(&ExportValue::Text("Astrid Lindgren".into())));
    assert_eq!(export.get("IllustratorIn"), Some(&ExportValue::Text("Ilon Wikland".into())));
    assert_eq!(export.get("Kategorien"), Some(&ExportValue::Text("Kinderbuch".into())));
    assert_eq!(
        export.get("Themen"),
        Some(&ExportValue::Text("Mut, Antolin (3. Klasse)".into()))
    );
    assert_eq!(export.get("Einband"), Some(&ExportValue::Text("gebunden".into())));
    assert_eq!(export.get("Seitenzahl"), Some(&ExportValue::Text("48".into())));
    assert_eq!(export.get("Antolin"), Some(&ExportValue::Text("3. Klasse".into())));
    assert!(export.get("Dauer").is_none());
}

#[test]
fn test_movie_export_values() {
    let product = Product::from_record(fixtures().remove(2));
    let export = product.export(true);

    assert!(product.is(Variant::Movie));
    assert!(product.is_media());
    assert_eq!(export.get("AutorIn"), Some(&ExportValue::List(vec![])));
    assert_eq!(
        export.get("RegisseurIn"),
        Some(&ExportValue::List(vec!["Tage Danielsson".into()]))
    );
    assert_eq!(
        export.get("SchauspielerIn"),
        Some(&ExportValue::List(vec!["Hanna Lundin".into(), "Dan Lindberg".into()]))
    );
    assert_eq!(
        export.get("Altersempfehlung"),
        Some(&ExportValue::List(vec!["ab 6 Jahren".into()]))
    );
    assert_eq!(export.get("Dauer"), Some(&ExportValue::List(vec!["121".into()])));
    assert_eq!(product.isbn().join(""), "4006680077844");
}

#[test]
fn test_media_signal_wins_over_book_signal() {
    let product = Product::from_record(fixtures().remove(3));
    assert_eq!(product.variant(), Variant::Sound);
    assert_eq!(product.duration().join(""), "104");
    assert!(product.binding().is_empty());
}

#[test]
fn test_unknown_binding_on_generic_book() {
    let raw = RawRecord::new().with(fields::BINDING, "XYZ").with(fields::PRODUCT_GROUP, "1110");
    let product = Product::from_record(raw);
    assert_eq!(product.variant(), Variant::Book);
    assert_eq!(product.binding().join(""), "XYZ");
    assert!(product.page_count().is_empty());
}
