use std::collections::HashSet;

use log::debug;

use crate::schema::{CHANNEL_PREFIX, DATASET_PREFIX};
use crate::store::{ContainerStore, GroupId};

use super::PathError;

/// Next unused automatic dataset name in `group`.
///
/// Only children named `Dataset_<digits>` count; other suffixes are ignored.
/// Fails with [`PathError::AutoNameExhausted`] once `Dataset_<u64::MAX>` is taken.
pub fn next_auto_name<S: ContainerStore + ?Sized>(
    store: &S,
    group: GroupId,
) -> Result<String, PathError> {
    let highest = store
        .child_names(group)?
        .iter()
        .filter_map(|name| name.strip_prefix(DATASET_PREFIX))
        .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max();
    let next = match highest {
        Some(max) => max.checked_add(1).ok_or(PathError::AutoNameExhausted)?,
        None => 0,
    };

    let name = format!("{}{}", DATASET_PREFIX, next);
    debug!("Next automatic dataset name: {}", name);
    Ok(name)
}

/// Pick the dataset name: the explicit one if it is free, otherwise the next
/// automatic name.
pub fn assign_dataset_name<S: ContainerStore + ?Sized>(
    store: &S,
    group: GroupId,
    explicit: Option<&str>,
) -> Result<String, PathError> {
    match explicit {
        Some(name) => {
            if store.child(group, name)?.is_some() {
                return Err(PathError::DuplicateName(name.to_string()));
            }
            Ok(name.to_string())
        }
        None => next_auto_name(store, group),
    }
}

/// Channel suffixes supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelSuffixes {
    /// Zero-based channel index
    #[default]
    Index,
    /// One suffix; valid only for a single channel
    Single(String),
    /// One suffix per channel, in channel order
    List(Vec<String>),
}

impl From<&str> for ChannelSuffixes {
    fn from(suffix: &str) -> Self {
        ChannelSuffixes::Single(suffix.to_string())
    }
}

impl From<String> for ChannelSuffixes {
    fn from(suffix: String) -> Self {
        ChannelSuffixes::Single(suffix)
    }
}

impl From<usize> for ChannelSuffixes {
    fn from(suffix: usize) -> Self {
        ChannelSuffixes::Single(suffix.to_string())
    }
}

impl<S: ToString> From<Vec<S>> for ChannelSuffixes {
    fn from(suffixes: Vec<S>) -> Self {
        ChannelSuffixes::List(suffixes.iter().map(ToString::to_string).collect())
    }
}

impl<S: ToString, const N: usize> From<[S; N]> for ChannelSuffixes {
    fn from(suffixes: [S; N]) -> Self {
        ChannelSuffixes::List(suffixes.iter().map(ToString::to_string).collect())
    }
}

/// `Channel_<suffix>` names for `count` channels.
pub fn channel_names(suffixes: &ChannelSuffixes, count: usize) -> Result<Vec<String>, PathError> {
    let suffixes: Vec<String> = match suffixes {
        ChannelSuffixes::Index => (0..count).map(|i| i.to_string()).collect(),
        ChannelSuffixes::Single(suffix) => vec![suffix.clone()],
        ChannelSuffixes::List(list) => list.clone(),
    };
    if suffixes.len() != count {
        return Err(PathError::ChannelCountMismatch {
            channels: count,
            suffixes: suffixes.len(),
        });
    }

    let mut seen = HashSet::new();
    suffixes
        .into_iter()
        .map(|suffix| {
            let name = format!("{}{}", CHANNEL_PREFIX, suffix);
            if seen.insert(name.clone()) {
                Ok(name)
            } else {
                Err(PathError::DuplicateChannel(name))
            }
        })
        .collect()
}
