use crate::traits::Dialect;

/// SQL Server dialect with bracketed identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl Dialect for SqlServerDialect {
    fn name(&self) -> &str {
        "SqlServer"
    }

    fn escape_most_reserved_characters(&self, identifier: &str) -> String {
        format!("[{}]", identifier.replace(']', "]]"))
    }
}
