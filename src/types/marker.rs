use crate::error::{Result, SchemaError};

/// How the database generates a column's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseGeneratedOption {
    None,
    Identity,
    Computed,
}

impl TryFrom<i32> for DatabaseGeneratedOption {
    type Error = SchemaError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(DatabaseGeneratedOption::None),
            1 => Ok(DatabaseGeneratedOption::Identity),
            2 => Ok(DatabaseGeneratedOption::Computed),
            other => Err(SchemaError::Configuration(format!(
                "invalid database generated option: {}",
                other
            ))),
        }
    }
}

/// A declarative annotation attached to a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Explicit primary key.
    Key,
    /// Explicit column name.
    Column(&'static str),
    /// Property is not stored.
    NotMapped,
    /// Value is produced by the database.
    DatabaseGenerated(DatabaseGeneratedOption),
    /// Application-defined marker; carried along but not interpreted.
    Custom(&'static str),
}
