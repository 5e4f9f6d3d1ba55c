use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use osr_ingest::{LookupConfig, load_column_library, load_reference};
use osr_output::{STANDARDIZED_MARKER, is_standardized};
use osr_resolve::{KeyConflict, ReferenceSet};

use osr_cli::pipeline::{CleanOptions, Lookups, clean_file, compile_files, split_file};
use osr_cli::types::{CleanOutcome, CompileOutcome, LookupStatus, SplitOutput};

use crate::cli::{CleanArgs, CompileArgs, SplitArgs};

/// Where lookups come from for this run.
pub struct LookupContext {
    pub config: LookupConfig,
    pub dir: PathBuf,
}

impl LookupContext {
    pub fn resolve(config_path: Option<&Path>, lookup_dir: Option<&Path>) -> Result<Self> {
        let config = LookupConfig::load_or_default(config_path).context("load lookup config")?;
        let dir = config.lookup_dir(lookup_dir);
        info!(lookup_dir = %dir.display(), "using lookup directory");
        Ok(Self { config, dir })
    }
}

pub fn run_clean(args: &CleanArgs, lookups: &LookupContext) -> Result<Vec<CleanOutcome>> {
    let span = info_span!("clean_files", provider = %args.provider.code());
    let _guard = span.enter();
    let start = Instant::now();

    let files: Vec<&PathBuf> = args
        .files
        .iter()
        .filter(|path| {
            let skip = is_standardized(path);
            if skip {
                warn!(file = %path.display(), "already standardized; skipped");
            }
            !skip
        })
        .collect();
    if files.is_empty() {
        bail!("no files to clean; every file name already contains \"{STANDARDIZED_MARKER}\"");
    }

    let loaded = Lookups::load(&lookups.dir, &lookups.config, args.provider)?;
    let options = CleanOptions {
        provider: args.provider,
        output_dir: args.output_dir.as_deref(),
        parallel: !args.sequential,
    };
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        outcomes.push(clean_file(file, &loaded, options)?);
    }

    info!(
        files = outcomes.len(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(outcomes)
}

pub fn run_split(args: &SplitArgs) -> Result<Vec<SplitOutput>> {
    if !is_standardized(&args.file) {
        bail!(
            "{} is not a standardized report; its file name must contain \"{STANDARDIZED_MARKER}\"",
            args.file.display()
        );
    }
    split_file(&args.file, args.output_dir.as_deref())
}

pub fn run_compile(args: &CompileArgs) -> Result<CompileOutcome> {
    if args.files.len() < 2 {
        bail!("compile needs at least two files, got {}", args.files.len());
    }
    compile_files(&args.files, args.output_dir.as_deref())
}

/// Everything `osr lookups` reports.
pub struct LookupsReport {
    pub dir: PathBuf,
    pub statuses: Vec<LookupStatus>,
    pub skipped_territory_keys: usize,
    pub conflicts: Vec<KeyConflict>,
}

pub fn run_lookups(lookups: &LookupContext) -> Result<LookupsReport> {
    let span = info_span!("lookups", dir = %lookups.dir.display());
    let _guard = span.enter();
    let config = &lookups.config;
    let dir = &lookups.dir;

    let mut statuses = Vec::new();
    let mut load = |spec: &osr_ingest::LookupSpec| -> Result<osr_model::ReferenceTable> {
        let table = load_reference(dir, spec)
            .with_context(|| format!("load lookup {}", spec.file))?;
        statuses.push(LookupStatus {
            name: table.name.clone(),
            path: dir.join(&spec.file),
            entries: table.len(),
        });
        Ok(table)
    };
    let customers = load(&config.customers)?;
    let accounts = load(&config.accounts)?;
    let territories = load(&config.territories)?;
    load(&config.end_products)?;

    let library = load_column_library(dir, config).context("load column library")?;
    statuses.push(LookupStatus {
        name: "Column library".to_string(),
        path: dir.join(&config.column_library),
        entries: library.len(),
    });

    let references = ReferenceSet::new(&customers, &accounts, &territories)
        .context("index resolution lookups")?;
    Ok(LookupsReport {
        dir: dir.clone(),
        statuses,
        skipped_territory_keys: references.skipped_territory_keys(),
        conflicts: references.conflicts().to_vec(),
    })
}
