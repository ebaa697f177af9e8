use crate::traits::{ColumnNameFactory, Dialect, EntityType, TableNameFactory};
use crate::types::PropertyRecord;

/// Uses the entity's simple type name as the table name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTableNameFactory;

impl TableNameFactory for DefaultTableNameFactory {
    fn table_name(&self, entity: &EntityType, _dialect: &dyn Dialect) -> String {
        entity.name().to_string()
    }
}

/// Uses the explicit column marker if present, else the property name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColumnNameFactory;

impl ColumnNameFactory for DefaultColumnNameFactory {
    fn column_name(&self, property: &PropertyRecord) -> String {
        property
            .column_name_marker()
            .unwrap_or_else(|| property.name())
            .to_string()
    }
}
