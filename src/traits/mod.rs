mod dialect;
mod entity;
mod naming;

pub use dialect::Dialect;
pub use entity::{Entity, EntityType};
pub use naming::{ColumnNameFactory, TableNameFactory};
