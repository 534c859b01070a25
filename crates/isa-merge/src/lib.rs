//! Merges a native instruction table and a pseudo-instruction table into a
//! single catalog keyed by mnemonic.

pub mod config;
pub mod error;
pub mod files;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod pattern;

use tracing::info;

pub use config::MergeConfig;
pub use error::{MergeError, Result};
pub use merge::{merge, merge_with, Merger};
pub use model::*;
pub use normalize::{Identity, OperandNormalizer};

/// Loads both inputs, merges them and writes the catalog.
///
/// Both inputs are read and parsed before the output is opened, so a
/// missing or malformed input leaves the output untouched.
pub fn run(config: &MergeConfig) -> Result<MergeStats> {
    run_with(Identity, config)
}

pub fn run_with<N: OperandNormalizer>(normalizer: N, config: &MergeConfig) -> Result<MergeStats> {
    let instructions = files::read_instructions(&config.instructions)?;
    let pseudo = files::read_pseudo(&config.pseudo)?;
    info!(
        native = instructions.len(),
        pseudo = pseudo.len(),
        "loaded instruction tables"
    );

    let merged = merge_with(normalizer, &instructions, &pseudo);
    let stats = MergeStats::from_table(&merged);

    files::write_json(&config.output, &merged, config.pretty)?;
    info!(
        output = %config.output.display(),
        entries = stats.entries,
        shared = stats.shared,
        native_only = stats.native_only,
        pseudo_only = stats.pseudo_only,
        "wrote merged catalog"
    );
    Ok(stats)
}
