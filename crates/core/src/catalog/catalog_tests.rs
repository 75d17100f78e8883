use std::io::Write as _;

use crate::catalog::{Catalog, author_breakdown, categorize, method_breakdown};
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::CoreError;

fn endpoint(id: &str, method: &str, category: &str) -> Endpoint {
    Endpoint {
        id: id.to_owned(),
        name: format!("Endpoint {id}"),
        method: HttpMethod::from(method),
        path: format!("/api/{id}"),
        description: String::new(),
        parameters: Vec::new(),
        category: category.to_owned(),
        version: "1.0.0".to_owned(),
        author: "tests".to_owned(),
    }
}

#[test]
fn categorize_empty_is_empty() {
    assert!(categorize(&[]).is_empty());
}

#[test]
fn categorize_uses_first_seen_order() {
    let input = vec![
        endpoint("a1", "GET", "A"),
        endpoint("b1", "GET", "B"),
        endpoint("a2", "GET", "A"),
        endpoint("c1", "GET", "C"),
    ];
    let categories = categorize(&input);
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let a_ids: Vec<&str> = categories[0].endpoints.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(a_ids, vec!["a1", "a2"]);
}

#[test]
fn categorize_preserves_endpoint_count() {
    let catalog = Catalog::builtin();
    let total: usize = catalog.categories().iter().map(|c| c.endpoints.len()).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn categorize_is_case_sensitive() {
    let input = vec![endpoint("x", "GET", "Tools"), endpoint("y", "GET", "tools")];
    assert_eq!(categorize(&input).len(), 2);
}

#[test]
fn method_breakdown_merges_case() {
    let input = vec![
        endpoint("one", "GET", "A"),
        endpoint("two", "get", "A"),
        endpoint("three", "POST", "A"),
    ];
    let tally = method_breakdown(&input);
    assert_eq!(tally.len(), 2);
    assert_eq!((tally[0].method.as_str(), tally[0].count), ("GET", 2));
    assert_eq!((tally[1].method.as_str(), tally[1].count), ("POST", 1));
}

#[test]
fn method_breakdown_is_stable_for_ties() {
    let input = vec![
        endpoint("d", "DELETE", "A"),
        endpoint("p", "PUT", "A"),
        endpoint("g1", "GET", "A"),
        endpoint("g2", "GET", "A"),
        endpoint("patch", "patch", "A"),
    ];
    let methods: Vec<String> = method_breakdown(&input).into_iter().map(|m| m.method).collect();
    assert_eq!(methods, vec!["GET", "DELETE", "PUT", "PATCH"]);
}

#[test]
fn method_breakdown_counts_sum_to_input() {
    let catalog = Catalog::builtin();
    let total: usize = catalog.method_breakdown().iter().map(|m| m.count).sum();
    assert_eq!(total, catalog.len());
    assert!(method_breakdown(&[]).is_empty());
}

#[test]
fn author_breakdown_counts_sources() {
    let tally = Catalog::builtin().author_breakdown();
    assert_eq!(tally.len(), 2);
    assert_eq!((tally[0].author.as_str(), tally[0].count), ("wataru-api", 18));
    assert_eq!((tally[1].author.as_str(), tally[1].count), ("Shin-API-UI-V2", 3));
    assert!(author_breakdown(&[]).is_empty());
}

#[test]
fn builtin_catalog_layout() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 21);
    let names: Vec<String> = catalog.categories().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["anime", "ai", "downloader", "search", "tools", "random"]);
    assert!(catalog.contains("hello"));
    assert!(catalog.contains("reverse"));
    assert!(catalog.get("nope").is_none());
}

#[test]
fn builtin_ids_are_unique() {
    let catalog = Catalog::builtin();
    assert!(Catalog::new(catalog.endpoints().to_vec()).is_ok());
}

#[test]
fn new_rejects_duplicate_ids() {
    let result = Catalog::new(vec![endpoint("dup", "GET", "A"), endpoint("dup", "POST", "B")]);
    assert!(matches!(result, Err(CoreError::DuplicateEndpointId(id)) if id == "dup"));
}

#[test]
fn from_json_file_roundtrips_builtin() {
    let path = std::env::temp_dir().join(format!("frn-catalog-{}.json", std::process::id()));
    let json = serde_json::to_string_pretty(Catalog::builtin().endpoints()).unwrap();
    std::fs::File::create(&path).unwrap().write_all(json.as_bytes()).unwrap();

    let loaded = Catalog::load(Some(&path)).unwrap();
    assert_eq!(loaded.endpoints(), Catalog::builtin().endpoints());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn from_json_file_reports_bad_json() {
    let path =
        std::env::temp_dir().join(format!("frn-catalog-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();

    let result = Catalog::from_json_file(&path);
    assert!(matches!(result, Err(CoreError::InvalidCatalog { .. })));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn require_reports_missing_id() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.require("hello").unwrap().path, "/api/hello?name=");
    let err = catalog.require("missing").unwrap_err();
    assert!(matches!(err, CoreError::EndpointNotFound(ref id) if id == "missing"));
    assert_eq!(err.to_string(), "Endpoint not found: missing");
}
