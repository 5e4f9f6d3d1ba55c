//! Library half of the `osr` binary: logging setup and the pipeline stages
//! behind each subcommand.

pub mod logging;
pub mod pipeline;
pub mod types;
