use std::any::TypeId;

use crate::types::ColumnUsage;

/// Mapping of one property to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    select_name: String,
    parameter_name: String,
    property_name: String,
    usage: ColumnUsage,
}

impl ColumnSchema {
    pub fn new(
        select_name: impl Into<String>,
        parameter_name: impl Into<String>,
        property_name: impl Into<String>,
        usage: ColumnUsage,
    ) -> Self {
        Self {
            select_name: select_name.into(),
            parameter_name: parameter_name.into(),
            property_name: property_name.into(),
            usage,
        }
    }

    /// Escaped column name used in read queries.
    pub fn select_name(&self) -> &str {
        &self.select_name
    }

    /// Escaped property name used as a bind-parameter identifier.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn usage(&self) -> ColumnUsage {
        self.usage
    }
}

/// Derived table mapping for one entity type and dialect.
/// Columns follow property declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table_name: String,
    columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Finds a column by its property name.
    pub fn column(&self, property_name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.property_name == property_name)
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.usage.is_primary_key())
    }

    pub fn insertable_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.usage.is_insertable())
    }

    pub fn updatable_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.usage.is_updatable())
    }
}

/// Cache key: entity type identity plus dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaCacheKey {
    entity: TypeId,
    dialect_name: String,
}

impl SchemaCacheKey {
    pub fn new(entity: TypeId, dialect_name: impl Into<String>) -> Self {
        Self {
            entity,
            dialect_name: dialect_name.into(),
        }
    }

    pub fn entity(&self) -> TypeId {
        self.entity
    }

    pub fn dialect_name(&self) -> &str {
        &self.dialect_name
    }
}
