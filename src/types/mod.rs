mod column_usage;
mod marker;
mod property;
mod schema;
mod value_kind;

pub use column_usage::ColumnUsage;
pub use marker::{DatabaseGeneratedOption, Marker};
pub use property::{PropertyDescriptor, PropertyRecord};
pub use schema::{ColumnSchema, SchemaCacheKey, TableSchema};
pub use value_kind::{Scalar, ValueKind};
