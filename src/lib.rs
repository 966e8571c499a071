//! # sm2117 - I/Q Recordings per Rec. ITU-R SM.2117-0
//!
//! `sm2117` stores paired-channel sample data (in-phase/quadrature streams)
//! together with the descriptive metadata defined by Recommendation
//! ITU-R SM.2117-0, in a hierarchical container of named groups and
//! datasets.
//!
//! ## Key Features
//!
//! - **Layout detection**: complex vectors, `(2, n)` IQ-first and `(n, 2)`
//!   time-first arrays, and their multi-channel forms are recognised from
//!   the array shape alone.
//!
//! - **Validated metadata**: free-form attribute maps are checked against
//!   the Recommendation's schema, shorthand aliases are resolved, defaults
//!   filled in, timestamps coerced, and unknown keys kept under a `User`
//!   prefix.
//!
//! - **Hierarchical storage**: datasets live in nested groups; names are
//!   assigned collision-free (`Dataset_0`, `Dataset_1`, ...).
//!
//! - **Single-file container**: a `.sm2117` ZIP archive holding one Parquet
//!   table per dataset, with attributes in the Parquet footer. Writes are
//!   staged in memory and committed atomically.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ndarray::arr2;
//! use sm2117::prelude::*;
//!
//! // Two rows: in-phase, then quadrature
//! let recordings = Recordings::from(arr2(&[[1.0, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0]]));
//!
//! let metadata = RecordingMetadata::new()
//!     .carrier_frequency(2.4e9)
//!     .device("bench receiver")
//!     .with("antenna", "discone");
//!
//! let options = WriteOptions::new()
//!     .sampling_frequency(20e6)
//!     .group(["survey", "day1"]);
//!
//! let attributes = write_iq_dataset("capture", &recordings, &metadata, &options)?;
//! assert!(attributes.contains_key("User antenna"));
//!
//! let group = GroupPath::from(["survey", "day1"]);
//! let dataset = read_iq_dataset("capture.sm2117", "Dataset_0", &group)?;
//! println!("{} samples", dataset.sample_count());
//! # Ok::<(), sm2117::dataset::DatasetError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`format`]: layout classifier and channel codec
//! - [`schema`]: the metadata field registry
//! - [`metadata`]: attribute values, maps and the normalizer
//! - [`path`]: group path resolution and naming
//! - [`store`]: container store interface, in-memory and file-backed stores
//! - [`dataset`]: the write and read operations

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod format;
pub mod metadata;
pub mod path;
pub mod schema;
pub mod store;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{
        read_iq_dataset, write_iq_dataset, DatasetError, IqDataset, WriteOptions,
    };
    pub use crate::format::{classify, RecordingFormat, Recordings};
    pub use crate::metadata::{normalize, AttributeMap, AttributeValue, RecordingMetadata};
    pub use crate::path::{ChannelSuffixes, GroupPath};
    pub use crate::schema::{registry, Field, SM2117_EXTENSION, SM2117_MIMETYPE};
    pub use crate::store::{ContainerConfig, ContainerFile, ContainerStore, MemoryStore, WriteMode};
}
