/// sm2117 container format version - follows semantic versioning
pub const SM2117_FORMAT_VERSION: &str = "1.0.0";

/// File extension for sm2117 containers (without the leading dot)
pub const SM2117_EXTENSION: &str = "sm2117";

/// MIME type for sm2117 container files
pub const SM2117_MIMETYPE: &str = "application/vnd.itu.sm2117";

/// Prefix applied to metadata keys that are not part of the Recommendation
pub const USER_PREFIX: &str = "User";

/// Prefix of auto-generated dataset names (`Dataset_0`, `Dataset_1`, ...)
pub const DATASET_PREFIX: &str = "Dataset_";

/// Prefix of channel field names (`Channel_0`, `Channel_A`, ...)
pub const CHANNEL_PREFIX: &str = "Channel_";

/// Name of the in-phase member of a channel record
pub const REAL_FIELD: &str = "Real";

/// Name of the quadrature member of a channel record
pub const IMAG_FIELD: &str = "Imag";

/// Parquet footer key holding the format version
pub const KEY_FORMAT_VERSION: &str = "sm2117:format_version";

/// Parquet footer key holding the ordered, typed attribute list (JSON)
pub const KEY_ATTRIBUTES: &str = "sm2117:attributes";

/// Fixed value of the `ITU-R data set class` attribute
pub const DATA_SET_CLASS: &str = "I/Q";

/// Fixed value of the `ITU-R Recommendation` attribute
pub const RECOMMENDATION: &str = "Rec. ITU-R SM.2117-0";

/// Fixed value of the `Data set type interpretation` attribute
pub const TYPE_INTERPRETATION: &str = "Integer types, used to store I/Q data, are interpreted as fix point numbers with the radix point right to the most significant bit.";

/// Upper bound shared by both timestamp fields (seconds since the Unix epoch)
pub const MAX_TIMESTAMP_S: f64 = 1_767_150_000.0;
