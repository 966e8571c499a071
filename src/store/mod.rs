//! # Hierarchical Container Store
//!
//! Nested named groups holding named, fixed-length tables. Every table field
//! is a sequence of `(Real, Imag)` pairs of `f32`, and each table carries an
//! ordered attribute map.
//!
//! [`ContainerStore`] is the interface the writer and reader are generic
//! over. Two implementations are provided:
//!
//! - [`MemoryStore`]: purely in memory
//! - [`ContainerFile`]: a single `.sm2117` file (ZIP of Parquet tables) that
//!   stages changes in a [`MemoryStore`] and commits them atomically

mod config;
mod container;
mod error;
mod memory;


use num_complex::Complex32;

use crate::metadata::AttributeMap;

pub use config::{ContainerConfig, WriteMode};
pub use container::{read_container, write_container, ContainerFile};
pub use error::StoreError;
pub use memory::MemoryStore;

/// Handle to a group of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// Handle to a table of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

/// A child of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Nested group
    Group(GroupId),
    /// Table
    Table(TableId),
}

/// Operations the dataset writer and reader need from a container.
pub trait ContainerStore {
    /// The root group
    fn root(&self) -> GroupId;

    /// Look up a child of `parent` by name
    fn child(&self, parent: GroupId, name: &str) -> Result<Option<Node>, StoreError>;

    /// Children of `group` in creation order
    fn children(&self, group: GroupId) -> Result<Vec<(String, Node)>, StoreError>;

    /// Names of the children of `group` in creation order
    fn child_names(&self, group: GroupId) -> Result<Vec<String>, StoreError> {
        Ok(self
            .children(group)?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    /// Create a child group; fails if the name is taken
    fn create_group(&mut self, parent: GroupId, name: &str) -> Result<GroupId, StoreError>;

    /// Create a table with the given fields and a fixed row count.
    ///
    /// Fields start zero-filled.
    fn create_table(
        &mut self,
        group: GroupId,
        name: &str,
        fields: &[String],
        rows: usize,
    ) -> Result<TableId, StoreError>;

    /// Field names in declaration order
    fn field_names(&self, table: TableId) -> Result<Vec<String>, StoreError>;

    /// Fixed row count of a table
    fn row_count(&self, table: TableId) -> Result<usize, StoreError>;

    /// Write all rows of one field
    fn write_field(
        &mut self,
        table: TableId,
        field: &str,
        rows: &[Complex32],
    ) -> Result<(), StoreError>;

    /// Read all rows of one field
    fn read_field(&self, table: TableId, field: &str) -> Result<Vec<Complex32>, StoreError>;

    /// Set a batch of attributes in one step.
    ///
    /// Existing keys are replaced in place, new keys appended in order.
    fn set_attributes(&mut self, table: TableId, attributes: &AttributeMap)
        -> Result<(), StoreError>;

    /// All attributes of a table in order
    fn attributes(&self, table: TableId) -> Result<AttributeMap, StoreError>;
}
