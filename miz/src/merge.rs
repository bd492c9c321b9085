//! Path-level merge pipeline.
//!
//! One-shot and strictly ordered: load both missions, merge in memory, save
//! the output. Validation failures surface before the output file exists,
//! so a rejected merge never leaves a partially merged file on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use mizmerge_core::{MergeError, merge_client_flights};

use crate::container::{default_output_path, load_mission, save_mission};
use crate::error::MizError;

/// Pipeline failures: a document I/O problem or a merge rejection.
#[derive(Debug, Error)]
pub enum MergeFilesError {
    #[error(transparent)]
    Document(#[from] MizError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Summary of a completed file merge.
#[derive(Debug)]
pub struct MergeReport {
    /// Where the merged mission was written.
    pub output_path: PathBuf,
    /// Number of client flight groups inserted.
    pub groups_merged: usize,
    /// Countries created in the output, in insertion order.
    pub countries_created: Vec<String>,
}

/// Merges the client flights of `source` into `destination`, writing the
/// result to `output` (or to the `_merged` sibling of `destination` when no
/// explicit path is given).
///
/// The destination file itself is never rewritten. A failed run leaves at
/// most a partial output file and can simply be re-run.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use mizmerge_miz::merge_mission_files;
///
/// let report = merge_mission_files(
///     Path::new("mission1.miz"),
///     Path::new("mission2.miz"),
///     None,
/// )?;
/// println!("wrote {}", report.output_path.display());
/// # Ok::<(), mizmerge_miz::MergeFilesError>(())
/// ```
pub fn merge_mission_files(
    source: &Path,
    destination: &Path,
    output: Option<&Path>,
) -> Result<MergeReport, MergeFilesError> {
    let source_mission = load_mission(source)?;
    let destination_mission = load_mission(destination)?;

    let outcome = merge_client_flights(&source_mission, &destination_mission)?;

    let output_path = output.map_or_else(|| default_output_path(destination), Path::to_path_buf);
    save_mission(&outcome.mission, &output_path)?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        output = %output_path.display(),
        groups = outcome.groups_merged,
        "merge complete"
    );

    Ok(MergeReport {
        output_path,
        groups_merged: outcome.groups_merged,
        countries_created: outcome.countries_created,
    })
}
