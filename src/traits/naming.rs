use crate::traits::{Dialect, EntityType};
use crate::types::PropertyRecord;

/// Strategy that maps an entity type to its table name.
pub trait TableNameFactory: Send + Sync {
    fn table_name(&self, entity: &EntityType, dialect: &dyn Dialect) -> String;
}

/// Strategy that maps a property to its column name.
pub trait ColumnNameFactory: Send + Sync {
    fn column_name(&self, property: &PropertyRecord) -> String;
}
