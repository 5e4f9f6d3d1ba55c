use std::fs;
use std::path::Path;

use osr_ingest::{
    IngestError, LookupConfig, load_column_library, load_end_products, load_reference,
    load_resolution_tables, read_table,
};
use osr_model::{CanonicalField, CanonicalSchema, CellValue, Provider};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn lookup_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "rootCustomerMappings.csv",
        "\u{feff}Root Customer,ProperName,Notes\nAcme Corp, Acme ,x\nGlobex Inc,,\n,,\n",
    );
    write(
        dir.path(),
        "Master Account List.csv",
        "ProperName,SLS\nAcme,R01\n",
    );
    write(dir.path(), "CAZipCode.csv", "ZipCode,Sls\n92101,T10\n2134,T11\n");
    write(
        dir.path(),
        "EndProductMap.csv",
        "Proper Name,End Product\nAcme,Drones\n",
    );
    dir
}

#[test]
fn loads_reference_columns_in_file_order() {
    let dir = lookup_dir();
    let config = LookupConfig::default();

    let customers = load_reference(dir.path(), &config.customers).unwrap();

    assert_eq!(customers.name, "rootCustomerMappings");
    assert_eq!(customers.keys().collect::<Vec<_>>(), vec!["Acme Corp", "Globex Inc"]);
    assert_eq!(customers.values().collect::<Vec<_>>(), vec!["Acme", ""]);
}

#[test]
fn loads_all_resolution_tables() {
    let dir = lookup_dir();
    let tables = load_resolution_tables(dir.path(), &LookupConfig::default()).unwrap();
    assert_eq!(tables.accounts.len(), 1);
    assert_eq!(tables.territories.len(), 2);

    let products = load_end_products(dir.path(), &LookupConfig::default()).unwrap();
    assert_eq!(products.lookup("Acme"), Some("Drones"));
}

#[test]
fn missing_column_names_file_and_column() {
    let dir = lookup_dir();
    write(dir.path(), "CAZipCode.csv", "Zip,Sls\n92101,T10\n");

    let err = load_reference(dir.path(), &LookupConfig::default().territories).unwrap_err();

    match err {
        IngestError::MissingColumn { path, column } => {
            assert!(path.ends_with("CAZipCode.csv"));
            assert_eq!(column, "ZipCode");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_lookup_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_reference(dir.path(), &LookupConfig::default().accounts).unwrap_err();
    assert!(matches!(err, IngestError::MissingFile { .. }));
}

#[test]
fn column_library_file_replaces_builtin_synonyms() {
    let dir = lookup_dir();
    let config = LookupConfig::default();
    let schema = CanonicalSchema::for_provider(Provider::Mouser);

    let builtin = load_column_library(dir.path(), &config).unwrap();
    assert_eq!(builtin.match_field("Pieces", &schema), None);
    assert_eq!(builtin.match_field("qty", &schema), Some(CanonicalField::Quantity));

    write(
        dir.path(),
        "RootColumnLibrary.csv",
        "Quantity,zip code\nPieces,Ship Postal\nPcs,\n",
    );
    let library = load_column_library(dir.path(), &config).unwrap();
    assert_eq!(library.match_field("pieces", &schema), Some(CanonicalField::Quantity));
    assert_eq!(library.match_field("PCS", &schema), Some(CanonicalField::Quantity));
    assert_eq!(library.match_field("Ship Postal", &schema), Some(CanonicalField::ZipCode));
    assert_eq!(library.match_field("Quantity", &schema), Some(CanonicalField::Quantity));
    assert_eq!(library.match_field("qty", &schema), None);
}

#[test]
fn column_library_file_may_reassign_a_builtin_synonym() {
    let dir = lookup_dir();
    let schema = CanonicalSchema::for_provider(Provider::Mouser);
    write(
        dir.path(),
        "RootColumnLibrary.csv",
        "Reported Customer,Name\nCustomer Name,Contact\n",
    );

    let library = load_column_library(dir.path(), &LookupConfig::default()).unwrap();

    assert_eq!(
        library.match_field("customer name", &schema),
        Some(CanonicalField::ReportedCustomer)
    );
    assert_eq!(library.match_field("Contact", &schema), Some(CanonicalField::Name));
}

#[test]
fn column_library_rejects_a_synonym_listed_twice() {
    let dir = lookup_dir();
    write(
        dir.path(),
        "RootColumnLibrary.csv",
        "Quantity,Unit Price\nPcs,pcs\n",
    );

    let err = load_column_library(dir.path(), &LookupConfig::default()).unwrap_err();

    assert!(matches!(err, IngestError::Library { .. }));
}

#[test]
fn column_library_rejects_unknown_fields() {
    let dir = lookup_dir();
    write(dir.path(), "RootColumnLibrary.csv", "Colour\nred\n");

    let err = load_column_library(dir.path(), &LookupConfig::default()).unwrap_err();

    assert!(matches!(err, IngestError::Library { .. }));
    assert!(err.to_string().contains("Colour"));
}

#[test]
fn reads_insight_file_as_text() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "insight.csv",
        "Customer,Zip,Qty\nAcme,02134,10\n,92101,\n",
    );

    let table = read_table(&dir.path().join("insight.csv")).unwrap();

    assert_eq!(table.headers, vec!["Customer", "Zip", "Qty"]);
    assert_eq!(table.height(), 2);
    assert_eq!(table.cell(0, 1), &CellValue::Text("02134".to_string()));
    assert!(table.cell(1, 0).is_missing());
    assert!(table.cell(1, 2).is_missing());
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("osr.toml");
    write(dir.path(), "osr.toml", "lookup_dir = \"/srv/lookup\"\n");

    let config = LookupConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.lookup_dir_with(None, None), Path::new("/srv/lookup"));

    let missing = LookupConfig::load_or_default(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(missing, LookupConfig::default());

    write(dir.path(), "osr.toml", "lookup_dir = [\n");
    assert!(matches!(
        LookupConfig::load(&path),
        Err(IngestError::Toml { .. })
    ));
}
