//! Tests for osr-model types.

use osr_model::{
    CanonicalField, CanonicalRow, CanonicalSchema, CanonicalTable, CellValue, Flag, Provider,
    ReferenceTable, Table,
};

#[test]
fn provider_parses_codes_and_labels() {
    assert_eq!("dgk".parse::<Provider>(), Ok(Provider::DigiKey));
    assert_eq!("Abracon".parse::<Provider>(), Ok(Provider::Abracon));
    assert_eq!("NA".parse::<Provider>(), Ok(Provider::NotAssigned));
    assert!("Arrow".parse::<Provider>().is_err());
}

#[test]
fn provider_label_columns() {
    assert_eq!(
        Provider::DigiKey.label_field(),
        Some(CanonicalField::ReportedDistributor)
    );
    assert_eq!(
        Provider::Mouser.label_field(),
        Some(CanonicalField::ReportedDistributor)
    );
    assert_eq!(Provider::Abracon.label_field(), Some(CanonicalField::Principal));
    assert_eq!(Provider::NotAssigned.label_field(), None);
    assert!(Provider::DigiKey.fills_end_product());
    assert!(!Provider::Abracon.fills_end_product());
}

#[test]
fn table_pads_short_rows() {
    let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
    table.push_row(vec![CellValue::text("1")]);
    assert_eq!(table.rows[0].len(), 2);
    assert!(table.cell(0, 1).is_missing());
    assert!(table.cell(5, 5).is_missing());
    assert_eq!(table.column_index(" b "), Some(1));
}

#[test]
fn reference_table_keeps_order() {
    let table = ReferenceTable::from_pairs("accounts", [("Acme", "R01"), ("Globex", "R02")]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Acme", "Globex"]);
    assert_eq!(table.values().last(), Some("R02"));
}

#[test]
fn canonical_table_serializes() {
    let mut table = CanonicalTable::new(CanonicalSchema::for_provider(Provider::Abracon));
    let mut row = CanonicalRow::new()
        .with(CanonicalField::ReportedCustomer, "Acme")
        .with(CanonicalField::Quantity, 10.0);
    row.flag = Some(Flag::OutOfTerritory);
    table.rows.push(row);

    let json = serde_json::to_string(&table).expect("serialize table");
    let round: CanonicalTable = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
    assert_eq!(round.rows[0].text(CanonicalField::Quantity), "10");
    assert_eq!(round.rows[0].text(CanonicalField::Flag), "Out of territory");
}
