//! # I/Q Dataset Writer and Reader
//!
//! Top-level operations tying the pieces together.
//!
//! **Write**: metadata is normalized and the recordings are classified and
//! encoded first ([`prepare`]), so invalid input never opens the container.
//! The group path is then resolved (missing groups created), the dataset
//! name assigned, and the table plus all of its attributes committed as one
//! atomic file replacement.
//!
//! **Read**: the group path must exist; channels come back in stored order
//! as a `(channels, samples)` matrix next to the stored attributes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use num_complex::Complex64;
//! use sm2117::dataset::{read_iq_dataset, write_iq_dataset, WriteOptions};
//! use sm2117::format::Recordings;
//! use sm2117::metadata::RecordingMetadata;
//! use sm2117::path::GroupPath;
//!
//! let recordings = Recordings::from(vec![Complex64::new(1.0, 1.0), Complex64::new(2.0, 2.0)]);
//! let metadata = RecordingMetadata::new().carrier_frequency(433.92e6);
//! let options = WriteOptions::new()
//!     .sampling_frequency(1e6)
//!     .group(["site", "roof"])
//!     .dataset_name("Capture");
//!
//! write_iq_dataset("capture", &recordings, &metadata, &options)?;
//! let dataset = read_iq_dataset("capture", "Capture", &GroupPath::from(["site", "roof"]))?;
//! assert_eq!(dataset.channel_names, vec!["Channel_0"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod reader;
mod types;
mod writer;


use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::schema::SM2117_EXTENSION;

pub use error::DatasetError;
pub use reader::{read_from_store, read_iq_dataset};
pub use types::{Channel, IqDataset, PreparedDataset, WriteOptions};
pub use writer::{prepare, write_iq_dataset, write_to_store};

/// Container path for a target identifier, with `.sm2117` appended when
/// the identifier does not already end in it.
pub fn container_path<P: AsRef<Path>>(target: P) -> PathBuf {
    let target = target.as_ref();
    if target.extension().map_or(false, |ext| ext == SM2117_EXTENSION) {
        return target.to_path_buf();
    }
    let mut name = OsString::from(target.as_os_str());
    name.push(".");
    name.push(SM2117_EXTENSION);
    PathBuf::from(name)
}
