//! End-to-end tests for the pipeline stages.

use std::fs;
use std::path::{Path, PathBuf};

use osr_cli::pipeline::{CleanOptions, Lookups, clean_file, compile_files, output_path, split_file};
use osr_ingest::LookupConfig;
use osr_model::{Flag, Provider};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn lookup_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "rootCustomerMappings.csv",
        "Root Customer,ProperName\nAcme Corp,Acme\n",
    );
    write(dir.path(), "Master Account List.csv", "ProperName,SLS\nAcme,R01\n");
    write(dir.path(), "CAZipCode.csv", "ZipCode,Sls\n92101,T10\n2134,T11\n");
    write(
        dir.path(),
        "EndProductMap.csv",
        "Proper Name,End Product\nAcme Corp,Drones\n",
    );
    dir
}

const INSIGHT: &str = "\
Customer,Contact Name,Zip,Phone,Qty,Unit Price,Warehouse
Acme Corp,Ada Lovelace,92101-1234,5551234567,10,2.5,W1
,Grace Hopper,02134,,1,4,W2
Wayne Enterprises,Bruce,99999,15551234567,2,,W3
";

#[test]
fn clean_split_compile_round() {
    let lookups_dir = lookup_dir();
    let work = TempDir::new().unwrap();
    let input = write(work.path(), "insight.csv", INSIGHT);
    let lookups = Lookups::load(lookups_dir.path(), &LookupConfig::default(), Provider::Mouser)
        .unwrap();
    assert!(lookups.end_products.is_none());

    let outcome = clean_file(
        &input,
        &lookups,
        CleanOptions {
            provider: Provider::Mouser,
            output_dir: None,
            parallel: true,
        },
    )
    .unwrap();

    assert_eq!(outcome.output, work.path().join("insight (Standardized).csv"));
    assert_eq!(outcome.plan.unmapped_columns, vec!["Warehouse".to_string()]);
    assert_eq!(outcome.summary.rows, 3);
    assert_eq!(outcome.summary.flag_count(Flag::Individual), 1);
    assert_eq!(outcome.summary.flag_count(Flag::OutOfTerritory), 1);

    let cleaned = fs::read_to_string(&outcome.output).unwrap();
    insta::assert_snapshot!(cleaned, @r"
    Name,Reported Customer,Customer Class,Address,City,State,Zip Code,Phone,Email,Part Number,Description,Quantity,Unit Price,Invoiced Dollars,Invoice Date,Reported Distributor,Principal,OSR,Flag
    Ada Lovelace,Acme Corp,,,,,92101-1234,(555) 123-4567,,,,10,2.5,25,,Mouser,,R01,
    Grace Hopper,,,,,,02134,,,,,1,4,4,,Mouser,,T11,Individual
    Bruce,Wayne Enterprises,,,,,99999,1(555) 123-4567,,,,2,,,,Mouser,,,Out of territory
    ");

    let split_dir = work.path().join("split");
    let outputs = split_file(&outcome.output, Some(&split_dir)).unwrap();
    let names: Vec<_> = outputs
        .iter()
        .map(|output| output.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "[R01] insight (Standardized).csv",
            "[T11] insight (Standardized).csv",
            "[Unassigned] insight (Standardized).csv",
        ]
    );
    assert!(outputs.iter().all(|output| output.rows == 1));

    let feedback = vec![outputs[0].path.clone(), outputs[1].path.clone()];
    let compiled = compile_files(&feedback, Some(work.path())).unwrap();
    assert_eq!(compiled.output, work.path().join("insight (Compiled).csv"));
    assert_eq!(compiled.tables, 2);
    assert_eq!(compiled.rows, 2);
}

#[test]
fn sequential_and_parallel_cleaning_agree() {
    let lookups_dir = lookup_dir();
    let work = TempDir::new().unwrap();
    let input = write(work.path(), "insight.csv", INSIGHT);
    let lookups = Lookups::load(lookups_dir.path(), &LookupConfig::default(), Provider::Mouser)
        .unwrap();

    let mut outputs = Vec::new();
    for (parallel, dir) in [(false, "seq"), (true, "par")] {
        let out_dir = work.path().join(dir);
        let outcome = clean_file(
            &input,
            &lookups,
            CleanOptions {
                provider: Provider::Mouser,
                output_dir: Some(&out_dir),
                parallel,
            },
        )
        .unwrap();
        outputs.push(fs::read_to_string(outcome.output).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn digikey_cleaning_fills_end_products() {
    let lookups_dir = lookup_dir();
    let work = TempDir::new().unwrap();
    let input = write(work.path(), "dk.csv", "Customer,Zip\nAcme Corp,92101\n");
    let lookups = Lookups::load(lookups_dir.path(), &LookupConfig::default(), Provider::DigiKey)
        .unwrap();

    let outcome = clean_file(
        &input,
        &lookups,
        CleanOptions {
            provider: Provider::DigiKey,
            output_dir: None,
            parallel: false,
        },
    )
    .unwrap();

    let cleaned = fs::read_to_string(outcome.output).unwrap();
    let mut lines = cleaned.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with(
        "Name,Reported Customer,Customer Class,Must Contact,(Suggested) End Product,"
    ));
    assert!(lines.next().unwrap().starts_with(",Acme Corp,,,Drones,"));
}

#[test]
fn compile_reports_mismatched_layouts() {
    let work = TempDir::new().unwrap();
    let first = write(work.path(), "[R01] q3 (Standardized).csv", "Name,OSR\na,R01\n");
    let second = write(work.path(), "[R02] q3 (Standardized).csv", "OSR,Name\nR02,b\n");

    let error = compile_files(&[first, second], None).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("tables 1 and 2"), "{message}");
    assert!(message.contains("column 1"), "{message}");
}

#[test]
fn missing_territory_lookup_fails_loading() {
    let lookups_dir = lookup_dir();
    fs::remove_file(lookups_dir.path().join("CAZipCode.csv")).unwrap();

    let error = Lookups::load(lookups_dir.path(), &LookupConfig::default(), Provider::Mouser)
        .unwrap_err();

    assert!(format!("{error:#}").contains("CAZipCode.csv"));
}

#[test]
fn output_path_defaults_to_input_directory() {
    let input = Path::new("/data/in/file.csv");
    assert_eq!(
        output_path(input, None, "x.csv"),
        PathBuf::from("/data/in/x.csv")
    );
    assert_eq!(
        output_path(input, Some(Path::new("/out")), "x.csv"),
        PathBuf::from("/out/x.csv")
    );
}

#[test]
fn split_keeps_files_with_slashed_reps_in_the_output_directory() {
    let work = TempDir::new().unwrap();
    let report = write(
        work.path(),
        "q3 (Standardized).csv",
        "Name,OSR\nAda,R1/R2\nGrace,R1/R2\n",
    );
    let out_dir = work.path().join("out");

    let outputs = split_file(&report, Some(&out_dir)).unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].representative, "R1/R2");
    assert_eq!(outputs[0].path, out_dir.join("[R1_R2] q3 (Standardized).csv"));
    assert!(outputs[0].path.is_file());
    assert!(!out_dir.join("[R1").exists());
}
