//! Stages shared by the `osr` subcommands.
//!
//! Each stage is a plain function over paths and loaded lookups so the
//! commands stay thin and the stages can be tested without the binary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace};

use osr_ingest::{
    LookupConfig, load_column_library, load_end_products, load_resolution_tables, read_table,
};
use osr_map::{EndProductMap, MappingPlan, SchemaMapper, SynonymLibrary};
use osr_model::{CanonicalField, CanonicalTable, Provider, Table};
use osr_output::{
    compile, compiled_name, split_by_representative, split_name, standardized_name, write_csv,
};
use osr_resolve::{ReferenceSet, ResolutionSummary, Resolver};

use crate::logging::redact_value;
use crate::types::{CleanOutcome, CompileOutcome, SplitOutput};

/// Lookups needed to clean files from one provider.
#[derive(Debug)]
pub struct Lookups {
    pub library: SynonymLibrary,
    pub references: ReferenceSet,
    pub end_products: Option<EndProductMap>,
}

impl Lookups {
    /// Loads the column library and the resolution tables; the end-product
    /// map only for providers that carry the end-product column.
    pub fn load(dir: &Path, config: &LookupConfig, provider: Provider) -> Result<Self> {
        let span = info_span!("load_lookups", dir = %dir.display());
        let _guard = span.enter();

        let library = load_column_library(dir, config).context("load column library")?;
        let tables = load_resolution_tables(dir, config).context("load resolution lookups")?;
        let references =
            ReferenceSet::new(&tables.customers, &tables.accounts, &tables.territories)
                .context("index resolution lookups")?;
        let end_products = if provider.fills_end_product() {
            Some(load_end_products(dir, config).context("load end product map")?)
        } else {
            None
        };
        Ok(Self {
            library,
            references,
            end_products,
        })
    }
}

/// Options for [`clean_file`].
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions<'a> {
    pub provider: Provider,
    pub output_dir: Option<&'a Path>,
    pub parallel: bool,
}

/// A standardized, resolved insight table.
#[derive(Debug)]
pub struct CleanedTable {
    pub plan: MappingPlan,
    pub table: CanonicalTable,
    pub summary: ResolutionSummary,
}

/// Standardizes and resolves an in-memory insight table.
pub fn clean_table(
    raw: &Table,
    provider: Provider,
    lookups: &Lookups,
    parallel: bool,
) -> CleanedTable {
    let mut mapper = SchemaMapper::new(&lookups.library, provider);
    if let Some(end_products) = &lookups.end_products {
        mapper = mapper.with_end_products(end_products);
    }
    let (plan, standardized) = mapper.standardize_with_plan(raw);

    let resolver = Resolver::new(&lookups.references);
    let (resolved, summary) = if parallel {
        resolver.resolve_table_parallel(standardized)
    } else {
        resolver.resolve_table(standardized)
    };

    for row in resolved.rows.iter().filter(|row| row.flag.is_some()) {
        trace!(
            customer = %redact_value(&row.text(CanonicalField::ReportedCustomer)),
            zip = %redact_value(&row.text(CanonicalField::ZipCode)),
            flag = %row.text(CanonicalField::Flag),
            "flagged row"
        );
    }
    CleanedTable {
        plan,
        table: resolved,
        summary,
    }
}

/// Reads one insight file, cleans it, and writes `<stem> (Standardized).csv`.
pub fn clean_file(
    input: &Path,
    lookups: &Lookups,
    options: CleanOptions<'_>,
) -> Result<CleanOutcome> {
    let span = info_span!(
        "clean",
        file = %input.display(),
        provider = %options.provider.code()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let raw =
        read_table(input).with_context(|| format!("read insight file {}", input.display()))?;
    let CleanedTable {
        plan,
        table,
        summary,
    } = clean_table(&raw, options.provider, lookups, options.parallel);

    let output = output_path(input, options.output_dir, &standardized_name(input));
    write_csv(&output, &table.to_table()).with_context(|| format!("write {}", output.display()))?;

    info!(
        output = %output.display(),
        rows = summary.rows,
        duration_ms = start.elapsed().as_millis(),
        "insight file cleaned"
    );
    Ok(CleanOutcome {
        input: input.to_path_buf(),
        output,
        plan,
        summary,
    })
}

/// Writes one `[OSR] <file name>` report per representative.
pub fn split_file(input: &Path, output_dir: Option<&Path>) -> Result<Vec<SplitOutput>> {
    let span = info_span!("split", file = %input.display());
    let _guard = span.enter();

    let table = read_table(input).with_context(|| format!("read report {}", input.display()))?;
    let groups = split_by_representative(&table)
        .with_context(|| format!("split {}", input.display()))?;

    let mut outputs = Vec::with_capacity(groups.len());
    for group in groups {
        let path = output_path(input, output_dir, &split_name(&group.representative, input));
        write_csv(&path, &group.table).with_context(|| format!("write {}", path.display()))?;
        outputs.push(SplitOutput {
            representative: group.representative,
            path,
            rows: group.table.height(),
        });
    }
    Ok(outputs)
}

/// Concatenates feedback files into `<report name> (Compiled).csv`.
pub fn compile_files(inputs: &[PathBuf], output_dir: Option<&Path>) -> Result<CompileOutcome> {
    let Some(first) = inputs.first() else {
        bail!("no files to compile");
    };
    let span = info_span!("compile", files = inputs.len());
    let _guard = span.enter();

    let mut tables = Vec::with_capacity(inputs.len());
    for input in inputs {
        let table =
            read_table(input).with_context(|| format!("read report {}", input.display()))?;
        tables.push(table);
    }
    let compiled = compile(&tables).context("compile reports")?;

    let output = output_path(first, output_dir, &compiled_name(first));
    write_csv(&output, &compiled).with_context(|| format!("write {}", output.display()))?;
    Ok(CompileOutcome {
        output,
        tables: tables.len(),
        rows: compiled.height(),
    })
}

/// `name` inside `output_dir`, or next to `input` when no directory is given.
pub fn output_path(input: &Path, output_dir: Option<&Path>, name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => input
            .parent()
            .map_or_else(|| PathBuf::from(name), |parent| parent.join(name)),
    }
}
