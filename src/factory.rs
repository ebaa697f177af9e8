use std::fmt;
use std::sync::Arc;

use crate::classifier;
use crate::naming::{DefaultColumnNameFactory, DefaultTableNameFactory};
use crate::traits::{ColumnNameFactory, Dialect, Entity, EntityType, TableNameFactory};
use crate::types::{ColumnSchema, PropertyDescriptor, PropertyRecord, TableSchema};

/// Derives table schemas from entity types.
///
/// The factory is an immutable value. Reconfiguring it returns a new factory
/// and leaves the receiver untouched.
///
/// # Example
/// ```
/// use ormschema::dialects::SqlServerDialect;
/// use ormschema::types::PropertyDescriptor;
/// use ormschema::{Entity, TableSchemaFactory};
///
/// struct Person;
///
/// impl Entity for Person {
///     fn properties() -> Vec<PropertyDescriptor> {
///         vec![
///             PropertyDescriptor::of::<i32>("Id"),
///             PropertyDescriptor::of::<String>("Name"),
///         ]
///     }
/// }
///
/// let schema = TableSchemaFactory::new().make_table_schema::<Person>(&SqlServerDialect);
/// assert_eq!(schema.table_name(), "Person");
/// assert_eq!(schema.columns()[1].select_name(), "[Name]");
/// ```
#[derive(Clone)]
pub struct TableSchemaFactory {
    table_name_factory: Arc<dyn TableNameFactory>,
    column_name_factory: Arc<dyn ColumnNameFactory>,
}

impl TableSchemaFactory {
    /// Create a factory with the default naming strategies.
    pub fn new() -> Self {
        Self {
            table_name_factory: Arc::new(DefaultTableNameFactory),
            column_name_factory: Arc::new(DefaultColumnNameFactory),
        }
    }

    /// Returns a copy of this factory using a different table-name strategy.
    pub fn with_table_name_factory<F>(&self, factory: F) -> Self
    where
        F: TableNameFactory + 'static,
    {
        Self {
            table_name_factory: Arc::new(factory),
            column_name_factory: Arc::clone(&self.column_name_factory),
        }
    }

    /// Returns a copy of this factory using a different column-name strategy.
    pub fn with_column_name_factory<F>(&self, factory: F) -> Self
    where
        F: ColumnNameFactory + 'static,
    {
        Self {
            table_name_factory: Arc::clone(&self.table_name_factory),
            column_name_factory: Arc::new(factory),
        }
    }

    /// Returns the strategy used to name tables.
    pub fn table_name_factory(&self) -> &dyn TableNameFactory {
        self.table_name_factory.as_ref()
    }

    /// Returns the strategy used to name columns.
    pub fn column_name_factory(&self) -> &dyn ColumnNameFactory {
        self.column_name_factory.as_ref()
    }

    /// Build the schema for an entity type. Does not consult any cache.
    pub fn make_table_schema<E: Entity>(&self, dialect: &dyn Dialect) -> TableSchema {
        self.build(&EntityType::of::<E>(), &E::properties(), dialect)
    }

    fn build(
        &self,
        entity: &EntityType,
        descriptors: &[PropertyDescriptor],
        dialect: &dyn Dialect,
    ) -> TableSchema {
        let table_name = self.table_name_factory.table_name(entity, dialect);

        let properties: Vec<PropertyRecord> = descriptors
            .iter()
            .map(PropertyRecord::extract)
            .filter(|p| p.kind().is_mappable())
            .filter(|p| !p.is_not_mapped())
            .collect();

        let explicit_key = properties.iter().any(PropertyRecord::has_key_marker);

        let columns = properties
            .iter()
            .map(|property| {
                let column_name = self.column_name_factory.column_name(property);
                ColumnSchema::new(
                    dialect.escape_most_reserved_characters(&column_name),
                    dialect.escape_most_reserved_characters(property.name()),
                    property.name(),
                    classifier::classify(explicit_key, property),
                )
            })
            .collect::<Vec<_>>();

        log::debug!(
            "built schema for {} ({}): table {}, {} of {} properties mapped",
            entity.name(),
            dialect.name(),
            table_name,
            columns.len(),
            descriptors.len()
        );

        TableSchema::new(table_name, columns)
    }
}

impl Default for TableSchemaFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableSchemaFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSchemaFactory").finish_non_exhaustive()
    }
}
