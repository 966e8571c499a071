use num_complex::Complex32;

use crate::metadata::AttributeMap;

use super::{ContainerStore, GroupId, Node, StoreError, TableId};

#[derive(Debug, Clone, Default, PartialEq)]
struct GroupNode {
    children: Vec<(String, Node)>,
}

#[derive(Debug, Clone, PartialEq)]
struct TableNode {
    rows: usize,
    fields: Vec<(String, Vec<Complex32>)>,
    attributes: AttributeMap,
}

/// In-memory hierarchical store.
///
/// Groups and tables live in two arenas addressed by [`GroupId`] and
/// [`TableId`]; children are enumerated in creation order. This is also the
/// staging area of [`super::ContainerFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStore {
    groups: Vec<GroupNode>,
    tables: Vec<TableNode>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a store holding only the root group
    pub fn new() -> Self {
        Self {
            groups: vec![GroupNode::default()],
            tables: Vec::new(),
        }
    }

    /// Number of tables in the whole tree
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    fn group_node(&self, id: GroupId) -> Result<&GroupNode, StoreError> {
        self.groups.get(id.0).ok_or(StoreError::NotFound {
            kind: "group",
            id: id.0,
        })
    }

    fn table_node(&self, id: TableId) -> Result<&TableNode, StoreError> {
        self.tables.get(id.0).ok_or(StoreError::NotFound {
            kind: "table",
            id: id.0,
        })
    }

    fn table_node_mut(&mut self, id: TableId) -> Result<&mut TableNode, StoreError> {
        self.tables.get_mut(id.0).ok_or(StoreError::NotFound {
            kind: "table",
            id: id.0,
        })
    }

    /// Validate the name and check it is free under `parent`
    fn claim_name(&self, parent: GroupId, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        if self.child(parent, name)?.is_some() {
            return Err(StoreError::NameConflict(name.to_string()));
        }
        Ok(())
    }
}

/// Names become path segments of the container, so separators and
/// relative components are refused.
pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') || name.contains('\\')
    {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl ContainerStore for MemoryStore {
    fn root(&self) -> GroupId {
        GroupId(0)
    }

    fn child(&self, parent: GroupId, name: &str) -> Result<Option<Node>, StoreError> {
        Ok(self
            .group_node(parent)?
            .children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| *node))
    }

    fn children(&self, group: GroupId) -> Result<Vec<(String, Node)>, StoreError> {
        Ok(self.group_node(group)?.children.clone())
    }

    fn create_group(&mut self, parent: GroupId, name: &str) -> Result<GroupId, StoreError> {
        self.claim_name(parent, name)?;
        let id = GroupId(self.groups.len());
        self.groups.push(GroupNode::default());
        self.groups[parent.0]
            .children
            .push((name.to_string(), Node::Group(id)));
        Ok(id)
    }

    fn create_table(
        &mut self,
        group: GroupId,
        name: &str,
        fields: &[String],
        rows: usize,
    ) -> Result<TableId, StoreError> {
        self.claim_name(group, name)?;
        if fields.is_empty() {
            return Err(StoreError::InvalidFormat(format!(
                "table '{}' needs at least one field",
                name
            )));
        }
        let mut columns: Vec<(String, Vec<Complex32>)> = Vec::with_capacity(fields.len());
        for field in fields {
            validate_name(field)?;
            if columns.iter().any(|(existing, _)| existing == field) {
                return Err(StoreError::NameConflict(field.clone()));
            }
            columns.push((field.clone(), vec![Complex32::new(0.0, 0.0); rows]));
        }

        let id = TableId(self.tables.len());
        self.tables.push(TableNode {
            rows,
            fields: columns,
            attributes: AttributeMap::new(),
        });
        self.groups[group.0]
            .children
            .push((name.to_string(), Node::Table(id)));
        Ok(id)
    }

    fn field_names(&self, table: TableId) -> Result<Vec<String>, StoreError> {
        Ok(self
            .table_node(table)?
            .fields
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn row_count(&self, table: TableId) -> Result<usize, StoreError> {
        Ok(self.table_node(table)?.rows)
    }

    fn write_field(
        &mut self,
        table: TableId,
        field: &str,
        rows: &[Complex32],
    ) -> Result<(), StoreError> {
        let node = self.table_node_mut(table)?;
        if rows.len() != node.rows {
            return Err(StoreError::LengthMismatch {
                expected: node.rows,
                found: rows.len(),
            });
        }
        let column = node
            .fields
            .iter_mut()
            .find(|(name, _)| name == field)
            .ok_or_else(|| StoreError::FieldNotFound(field.to_string()))?;
        column.1.copy_from_slice(rows);
        Ok(())
    }

    fn read_field(&self, table: TableId, field: &str) -> Result<Vec<Complex32>, StoreError> {
        self.table_node(table)?
            .fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| StoreError::FieldNotFound(field.to_string()))
    }

    fn set_attributes(
        &mut self,
        table: TableId,
        attributes: &AttributeMap,
    ) -> Result<(), StoreError> {
        let node = self.table_node_mut(table)?;
        node.attributes.extend(
            attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone())),
        );
        Ok(())
    }

    fn attributes(&self, table: TableId) -> Result<AttributeMap, StoreError> {
        Ok(self.table_node(table)?.attributes.clone())
    }
}
