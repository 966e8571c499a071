use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

/// How a container file is opened for writing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Load the existing container, or start empty if there is none
    #[default]
    Append,
    /// Start empty; the existing file is replaced on commit
    Overwrite,
}

/// Encoding settings for tables inside a container file
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// ZSTD compression level (3 recommended)
    pub compression_level: i32,

    /// Target row group size in samples
    pub row_group_size: usize,

    /// Data page size in bytes
    pub data_page_size: usize,

    /// Whether to write column statistics
    pub write_statistics: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            compression_level: 3,
            row_group_size: 1024 * 1024,
            data_page_size: 1024 * 1024,
            write_statistics: false,
        }
    }
}

impl ContainerConfig {
    /// Create writer properties carrying `metadata` in the Parquet footer
    pub(crate) fn to_writer_properties(&self, metadata: Vec<KeyValue>) -> WriterProperties {
        let compression = Compression::ZSTD(
            ZstdLevel::try_new(self.compression_level).unwrap_or(ZstdLevel::default()),
        );

        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        // Sample values are effectively unique
        WriterProperties::builder()
            .set_compression(compression)
            .set_data_page_size_limit(self.data_page_size)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size.max(1))
            .set_dictionary_enabled(false)
            .set_key_value_metadata(Some(metadata))
            .build()
    }
}
