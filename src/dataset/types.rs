use ndarray::{Array2, ArrayView1};
use num_complex::Complex32;

use crate::format::RecordingFormat;
use crate::metadata::AttributeMap;
use crate::path::{ChannelSuffixes, GroupPath};
use crate::store::{ContainerConfig, WriteMode};

/// Options for [`super::write_iq_dataset`]
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Sampling frequency in Hz; overrides any value in the metadata
    pub sampling_frequency: Option<f64>,

    /// Target group (root when empty)
    pub group: GroupPath,

    /// Explicit dataset name; the next `Dataset_<n>` when absent
    pub dataset_name: Option<String>,

    /// Channel name suffixes
    pub channel_suffixes: ChannelSuffixes,

    /// Append to or overwrite the container
    pub mode: WriteMode,

    /// Table encoding settings
    pub container: ContainerConfig,
}

impl WriteOptions {
    /// Default options: root group, automatic names, append mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling frequency in Hz
    pub fn sampling_frequency(mut self, hz: f64) -> Self {
        self.sampling_frequency = Some(hz);
        self
    }

    /// Set the target group
    pub fn group(mut self, group: impl Into<GroupPath>) -> Self {
        self.group = group.into();
        self
    }

    /// Set an explicit dataset name
    pub fn dataset_name(mut self, name: impl Into<String>) -> Self {
        self.dataset_name = Some(name.into());
        self
    }

    /// Set the channel suffixes
    pub fn channel_suffixes(mut self, suffixes: impl Into<ChannelSuffixes>) -> Self {
        self.channel_suffixes = suffixes.into();
        self
    }

    /// Set the write mode
    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the table encoding settings
    pub fn container_config(mut self, config: ContainerConfig) -> Self {
        self.container = config;
        self
    }
}

/// One named channel of encoded samples
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// `Channel_<suffix>`
    pub name: String,
    /// Samples in time order
    pub samples: Vec<Complex32>,
}

/// A dataset fully built in memory, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    /// Layout the recordings were classified as
    pub format: RecordingFormat,
    /// Channels in input order
    pub channels: Vec<Channel>,
    /// Normalized attributes
    pub attributes: AttributeMap,
}

impl PreparedDataset {
    /// Samples per channel
    pub fn sample_count(&self) -> usize {
        self.channels.first().map_or(0, |c| c.samples.len())
    }

    /// Channel names in order
    pub fn channel_names(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.name.clone()).collect()
    }
}

/// A dataset read back from a container
#[derive(Debug, Clone, PartialEq)]
pub struct IqDataset {
    /// Attributes as stored
    pub attributes: AttributeMap,
    /// `(channels, samples)` matrix in stored channel order
    pub samples: Array2<Complex32>,
    /// Channel names in stored order
    pub channel_names: Vec<String>,
}

impl IqDataset {
    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.samples.nrows()
    }

    /// Samples per channel
    pub fn sample_count(&self) -> usize {
        self.samples.ncols()
    }

    /// Samples of one channel by name
    pub fn channel(&self, name: &str) -> Option<ArrayView1<'_, Complex32>> {
        self.channel_names
            .iter()
            .position(|n| n == name)
            .map(|index| self.samples.row(index))
    }
}
