//! ormschema - table schema inference for a micro-ORM
//!
//! Derives the table name, column names, primary keys and database
//! generation behavior of an entity type for a SQL dialect, and caches the
//! result per (type, dialect).
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use ormschema::dialects::PostgresDialect;
//! use ormschema::types::{ColumnUsage, DatabaseGeneratedOption, PropertyDescriptor};
//! use ormschema::{get_table_schema, Entity};
//!
//! struct Order;
//!
//! impl Entity for Order {
//!     fn properties() -> Vec<PropertyDescriptor> {
//!         vec![
//!             PropertyDescriptor::of::<i64>("Id")
//!                 .database_generated(DatabaseGeneratedOption::Identity),
//!             PropertyDescriptor::of::<String>("Customer").column("customer_name"),
//!         ]
//!     }
//! }
//!
//! let schema = get_table_schema::<Order>(Some(&PostgresDialect));
//! assert_eq!(schema.table_name(), "Order");
//! assert_eq!(schema.columns()[0].usage(), ColumnUsage::ComputedPrimaryKey);
//! assert_eq!(schema.columns()[1].select_name(), "\"customer_name\"");
//! assert!(Arc::ptr_eq(&schema, &get_table_schema::<Order>(Some(&PostgresDialect))));
//! ```

pub mod classifier;
pub mod dialects;
pub mod error;
pub mod naming;
pub mod traits;
pub mod types;

mod factory;
mod registry;

// Re-export main types for convenient access
pub use error::{Result, SchemaError};
pub use factory::TableSchemaFactory;
pub use registry::{get_table_schema, SchemaRegistry};
pub use traits::{ColumnNameFactory, Dialect, Entity, EntityType, TableNameFactory};
pub use types::{ColumnSchema, ColumnUsage, PropertyDescriptor, PropertyRecord, TableSchema};
