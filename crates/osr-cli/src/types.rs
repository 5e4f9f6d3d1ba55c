use std::path::PathBuf;

use osr_map::MappingPlan;
use osr_resolve::ResolutionSummary;

/// One standardized insight file.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub plan: MappingPlan,
    pub summary: ResolutionSummary,
}

/// One file written by a split.
#[derive(Debug)]
pub struct SplitOutput {
    pub representative: String,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub struct CompileOutcome {
    pub output: PathBuf,
    pub tables: usize,
    pub rows: usize,
}

/// Row count of one loaded lookup.
#[derive(Debug)]
pub struct LookupStatus {
    pub name: String,
    pub path: PathBuf,
    pub entries: usize,
}
