use crate::traits::Dialect;

/// MySQL dialect with backtick-quoted identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &str {
        "MySql"
    }

    fn escape_most_reserved_characters(&self, identifier: &str) -> String {
        format!("`{}`", identifier.replace('`', "``"))
    }
}
