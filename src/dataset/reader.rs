use std::path::Path;

use log::info;

use crate::format::stack_channels;
use crate::path::{resolve, GroupPath};
use crate::store::{ContainerFile, ContainerStore, Node};

use super::{container_path, DatasetError, IqDataset};

/// Read one dataset from any store.
pub fn read_from_store<S: ContainerStore + ?Sized>(
    store: &S,
    name: &str,
    group: &GroupPath,
) -> Result<IqDataset, DatasetError> {
    let group_id = resolve(store, group)?;
    let table = match store.child(group_id, name)? {
        Some(Node::Table(table)) => table,
        _ => {
            return Err(DatasetError::NotFound {
                name: name.to_string(),
                group: group.to_string(),
            })
        }
    };

    let channel_names = store.field_names(table)?;
    let channels = channel_names
        .iter()
        .map(|field| store.read_field(table, field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IqDataset {
        attributes: store.attributes(table)?,
        samples: stack_channels(&channels)?,
        channel_names,
    })
}

/// Read one dataset from the container at `target` (`.sm2117` is appended
/// when missing).
pub fn read_iq_dataset<P: AsRef<Path>>(
    target: P,
    name: &str,
    group: &GroupPath,
) -> Result<IqDataset, DatasetError> {
    let path = container_path(target);
    let file = ContainerFile::open_read(&path)?;
    let dataset = read_from_store(file.store(), name, group)?;

    info!(
        "Read dataset '{}' from {} ({} channel(s) x {} samples)",
        name,
        path.display(),
        dataset.channel_count(),
        dataset.sample_count()
    );
    Ok(dataset)
}
