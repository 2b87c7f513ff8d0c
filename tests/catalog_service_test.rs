use std::sync::Arc;
use std::time::Duration;

use bibliogenius_catalog::domain::RecordSource;
use bibliogenius_catalog::modules::integrations::KnvClient;
use bibliogenius_catalog::{
    BindingTable, CatalogService, Config, DomainError, RecordCache, Variant,
};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to point a client at the mock server
fn test_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        cover_url: format!("{}/cover", server.uri()),
        user: Some("kunde".to_string()),
        password: Some("geheim".to_string()),
        timeout_secs: 5,
        ..Config::default()
    }
}

fn service(server: &MockServer) -> CatalogService {
    let config = test_config(server);
    let client = Arc::new(KnvClient::new(&config).expect("Failed to build client"));
    CatalogService::new(client.clone(), RecordCache::in_memory(Duration::from_secs(60)))
        .with_covers(client)
}

async fn mount_record(server: &MockServer, id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/products/{}", id)))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_load_classifies_and_extracts() {
    let mock_server = MockServer::start().await;
    mount_record(
        &mock_server,
        "9783407794036",
        serde_json::json!({
            "ISBN": "978-3-407-79403-6",
            "Titel": "Der Grüffelo",
            "Einband": "GEB",
            "Abb": "1. Auflage 2021. 48 S. durchgehend farbig illustriert 28 cm",
            "IndexAutor": ["Donaldson, Julia"],
            "Mitarb": "Illustration: Scheffler, Axel",
            "IndexSchlagw": ["Bilderbuch", "Antolin (3. Klasse)"]
        }),
    )
    .await;

    let product = service(&mock_server)
        .load("978-3-407-79403-6")
        .await
        .expect("load failed");

    assert_eq!(product.variant(), Variant::Hardcover);
    assert_eq!(product.page_count().join(""), "48");
    assert_eq!(product.binding().join(""), "gebunden");
    assert_eq!(product.antolin().join(""), "3. Klasse");
    assert_eq!(
        product.people("; "),
        "Autor: Julia Donaldson. Illustration: Axel Scheffler"
    );
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/0000000000000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = KnvClient::new(&test_config(&mock_server)).unwrap();
    let err = client.fetch("0000000000000").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(id) if id == "0000000000000"));
}

#[tokio::test]
async fn test_server_error_is_external() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = KnvClient::new(&test_config(&mock_server)).unwrap();
    let err = client.fetch("1").await.unwrap_err();
    assert!(matches!(err, DomainError::External(_)));
}

#[tokio::test]
async fn test_records_are_cached() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/4006680077844"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Sortimentskennzeichen": "AV",
            "Utitel": "Spielfilm. FSK ab 6 freigegeben. 121 Min."
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let catalog = service(&mock_server);
    let first = catalog.load("4006680077844").await.unwrap();
    let second = catalog.load("4006680077844").await.unwrap();
    assert_eq!(first.duration(), second.duration());
    assert_eq!(first.age().join(""), "ab 6 Jahren");

    // Forgetting the record forces a second fetch
    assert!(catalog.forget("4006680077844").await.unwrap());
    catalog.load("4006680077844").await.unwrap();
}

#[tokio::test]
async fn test_load_all_keeps_order_and_skips_failures() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, "1", serde_json::json!({"Titel": "Eins", "Einband": "KT"})).await;
    mount_record(&mock_server, "3", serde_json::json!({"Titel": "Drei", "Einband": "CD"})).await;
    Mock::given(method("GET"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let collection = service(&mock_server).load_all(["1", "2", "3"]).await;

    assert_eq!(collection.count(), 2);
    let titles: Vec<String> = collection.iter().map(|p| p.title().join("")).collect();
    assert_eq!(titles, vec!["Eins", "Drei"]);
    assert_eq!(collection.get(0).map(|p| p.variant()), Some(Variant::Softcover));
    assert_eq!(collection.get(1).map(|p| p.variant()), Some(Variant::Sound));
}

#[tokio::test]
async fn test_cover_download() {
    let mock_server = MockServer::start().await;
    let png: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    Mock::given(method("GET"))
        .and(path("/cover/9783407794036"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png.clone()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let written = service(&mock_server)
        .load_cover("978-3-407-79403-6", dir.path())
        .await
        .expect("cover download failed");

    assert_eq!(written, dir.path().join("9783407794036.png"));
    assert_eq!(std::fs::read(written).unwrap(), png);
}

#[tokio::test]
async fn test_cover_requires_source() {
    let mock_server = MockServer::start().await;
    let client = Arc::new(KnvClient::new(&test_config(&mock_server)).unwrap());
    let catalog = CatalogService::new(client, RecordCache::in_memory(Duration::from_secs(60)));

    let dir = tempfile::tempdir().unwrap();
    let err = catalog.load_cover("1", dir.path()).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_custom_binding_table() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, "1", serde_json::json!({"Titel": "Eins", "Einband": "GEB"})).await;

    let table = BindingTable::from_json(r#"{"GEB": "Hardcover"}"#).unwrap();
    let catalog = service(&mock_server).with_bindings(Arc::new(table));
    let product = catalog.load("1").await.unwrap();

    assert_eq!(product.variant(), Variant::Hardcover);
    assert_eq!(product.binding().join(""), "Hardcover");
    assert_eq!(catalog.bindings().len(), 1);
}

#[tokio::test]
async fn test_bundled_binding_table_by_default() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, "1", serde_json::json!({"Einband": "GEB"})).await;

    let catalog = service(&mock_server);
    let product = catalog.load("1").await.unwrap();

    assert!(std::ptr::eq(catalog.bindings(), BindingTable::global()));
    assert_eq!(product.binding().join(""), "gebunden");
}
