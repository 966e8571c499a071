//! # Metadata Normalizer
//!
//! Free-form descriptive metadata for an I/Q data set arrives as an
//! open-ended map mixing canonical attribute names, shorthand aliases and
//! arbitrary extra keys. [`normalize`] turns such a map into the validated,
//! ordered attribute set stored next to the samples.
//!
//! ## Stages
//!
//! 1. **Alias resolution**: shorthand keys such as `sampling_frequency` are
//!    rewritten to their canonical names; a canonical key wins over its alias.
//! 2. **Coercion**: date-like timestamps become epoch seconds.
//! 3. **Validation**: type, bounds, allowed and forbidden values, read-only
//!    constants and field dependencies. All violations are collected and
//!    reported together.
//! 4. **Defaults**: absent required fields take their default value.
//! 5. **Ordering**: canonical fields in declaration order, then extra keys
//!    (under the `User` prefix) in first-seen order.
//!
//! ## Example
//!
//! ```
//! use sm2117::metadata::{normalize, RecordingMetadata};
//!
//! let raw = RecordingMetadata::new()
//!     .sampling_frequency(1e6)
//!     .with("antenna", "roof")
//!     .to_attribute_map();
//! let attrs = normalize(&raw).unwrap();
//! assert_eq!(attrs.keys().next(), Some("ITU-R data set class"));
//! assert!(attrs.contains_key("User antenna"));
//! ```

mod date;
mod error;
mod map;
mod normalize;
mod record;
mod value;


pub use date::{parse_date, to_epoch_seconds, to_fractional_epoch_seconds, DateError};
pub use error::{FieldViolation, MetadataError, ValidationErrors, ViolationReason};
pub use map::AttributeMap;
pub use normalize::normalize;
pub use record::RecordingMetadata;
pub use value::AttributeValue;
