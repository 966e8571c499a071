//! # Hierarchical Path Resolver
//!
//! Resolves nested group paths inside a [`ContainerStore`] and assigns
//! collision-free dataset and channel names.
//!
//! - [`resolve_or_create`] walks a [`GroupPath`] root to leaf, reusing
//!   existing groups and creating missing ones.
//! - [`resolve`] does the same walk but fails on a missing segment.
//! - [`next_auto_name`] returns `Dataset_<max + 1>` over the numeric
//!   suffixes already present in a group (`Dataset_0` if there are none).
//! - [`channel_names`] turns [`ChannelSuffixes`] into `Channel_<suffix>`
//!   field names.

mod error;
mod names;

#[cfg(test)]
mod tests;

use std::fmt;

use log::debug;

use crate::store::{ContainerStore, GroupId, Node};

pub use error::PathError;
pub use names::{assign_dataset_name, channel_names, next_auto_name, ChannelSuffixes};

/// Ordered group names from the root to the leaf; empty means the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupPath {
    segments: Vec<String>,
}

impl GroupPath {
    /// The root group
    pub fn root() -> Self {
        Self::default()
    }

    /// Build from segments, root first
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `/`-separated path; empty segments are skipped
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('/').filter(|s| !s.is_empty()))
    }

    /// Segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for GroupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// A single segment name
impl From<&str> for GroupPath {
    fn from(segment: &str) -> Self {
        Self::new([segment])
    }
}

/// A single segment name
impl From<String> for GroupPath {
    fn from(segment: String) -> Self {
        Self::new([segment])
    }
}

impl<S: Into<String>> From<Vec<S>> for GroupPath {
    fn from(segments: Vec<S>) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for GroupPath {
    fn from(segments: [S; N]) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<String>> From<Option<S>> for GroupPath {
    fn from(segment: Option<S>) -> Self {
        Self::new(segment)
    }
}

/// Resolve `path` under the root, creating missing groups.
pub fn resolve_or_create<S: ContainerStore + ?Sized>(
    store: &mut S,
    path: &GroupPath,
) -> Result<GroupId, PathError> {
    let mut current = store.root();
    for segment in path.segments() {
        current = match store.child(current, segment)? {
            Some(Node::Group(id)) => id,
            Some(Node::Table(_)) => return Err(not_a_group(segment, path)),
            None => {
                debug!("Creating group '{}' for {}", segment, path);
                store.create_group(current, segment)?
            }
        };
    }
    Ok(current)
}

/// Resolve `path` under the root without creating anything.
pub fn resolve<S: ContainerStore + ?Sized>(
    store: &S,
    path: &GroupPath,
) -> Result<GroupId, PathError> {
    let mut current = store.root();
    for segment in path.segments() {
        current = match store.child(current, segment)? {
            Some(Node::Group(id)) => id,
            Some(Node::Table(_)) => return Err(not_a_group(segment, path)),
            None => {
                return Err(PathError::GroupNotFound {
                    segment: segment.clone(),
                    path: path.to_string(),
                })
            }
        };
    }
    Ok(current)
}

fn not_a_group(segment: &str, path: &GroupPath) -> PathError {
    PathError::NotAGroup {
        segment: segment.to_string(),
        path: path.to_string(),
    }
}
