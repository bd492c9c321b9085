//! Mission file adapter: container I/O and the path-level merge pipeline.
//!
//! This crate owns everything that touches the filesystem:
//!
//! - [`load_mission`] / [`save_mission`] — mission container encoding
//!   (gzip-compressed JSON for `.miz`, plain JSON otherwise).
//! - [`default_output_path`] — the `_merged` sibling naming rule.
//! - [`merge_mission_files`] — the full pipeline around
//!   [`mizmerge_core::merge_client_flights`]: load both inputs, merge in
//!   memory, persist the output.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mizmerge_miz::merge_mission_files;
//!
//! let report = merge_mission_files(
//!     Path::new("mission1.miz"),
//!     Path::new("mission2.miz"),
//!     None,
//! )?;
//! println!(
//!     "merged {} group(s) into {}",
//!     report.groups_merged,
//!     report.output_path.display()
//! );
//! # Ok::<(), mizmerge_miz::MergeFilesError>(())
//! ```

pub mod container;
pub mod error;
pub mod merge;

pub use container::{default_output_path, load_mission, save_mission};
pub use error::{MizError, Result};
pub use merge::{MergeFilesError, MergeReport, merge_mission_files};
