use std::path::Path;

use log::info;

use crate::format::{split_channels, Recordings};
use crate::metadata::{normalize, AttributeMap, RecordingMetadata};
use crate::path::{assign_dataset_name, channel_names, resolve_or_create, GroupPath};
use crate::schema::Field;
use crate::store::{ContainerFile, ContainerStore};

use super::{container_path, Channel, DatasetError, PreparedDataset, WriteOptions};

/// Validate metadata, classify and encode the recordings, and name the
/// channels. Touches no store.
pub fn prepare(
    recordings: &Recordings,
    metadata: &RecordingMetadata,
    options: &WriteOptions,
) -> Result<PreparedDataset, DatasetError> {
    let mut raw = metadata.to_attribute_map();
    if let Some(hz) = options.sampling_frequency {
        if let Some(alias) = Field::SamplingFrequency.alias() {
            raw.remove(alias);
        }
        raw.insert(Field::SamplingFrequency.name(), hz);
    }
    let attributes = normalize(&raw)?;

    let (format, encoded) = split_channels(recordings)?;
    let names = channel_names(&options.channel_suffixes, encoded.len())?;
    let channels = names
        .into_iter()
        .zip(encoded)
        .map(|(name, samples)| Channel { name, samples })
        .collect();

    Ok(PreparedDataset {
        format,
        channels,
        attributes,
    })
}

/// Persist a prepared dataset under `group`, returning the dataset name.
pub fn write_to_store<S: ContainerStore + ?Sized>(
    store: &mut S,
    prepared: &PreparedDataset,
    group: &GroupPath,
    name: Option<&str>,
) -> Result<String, DatasetError> {
    let group_id = resolve_or_create(store, group)?;
    let name = assign_dataset_name(store, group_id, name)?;

    let table = store.create_table(
        group_id,
        &name,
        &prepared.channel_names(),
        prepared.sample_count(),
    )?;
    for channel in &prepared.channels {
        store.write_field(table, &channel.name, &channel.samples)?;
    }
    store.set_attributes(table, &prepared.attributes)?;

    Ok(name)
}

/// Write recordings and metadata as one dataset of the container at
/// `target` (`.sm2117` is appended when missing).
///
/// Metadata and shape problems are reported before the file is opened.
/// Returns the normalized attributes that were stored.
pub fn write_iq_dataset<P: AsRef<Path>>(
    target: P,
    recordings: &Recordings,
    metadata: &RecordingMetadata,
    options: &WriteOptions,
) -> Result<AttributeMap, DatasetError> {
    let prepared = prepare(recordings, metadata, options)?;

    let path = container_path(target);
    let mut file = ContainerFile::open_with_config(&path, options.mode, options.container.clone())?;
    let name = write_to_store(
        file.store_mut(),
        &prepared,
        &options.group,
        options.dataset_name.as_deref(),
    )?;
    file.commit()?;

    info!(
        "Wrote dataset '{}' to {} ({}, {} channel(s) x {} samples)",
        name,
        path.display(),
        prepared.format,
        prepared.channels.len(),
        prepared.sample_count()
    );
    Ok(prepared.attributes)
}
