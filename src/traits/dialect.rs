/// Trait for SQL dialects.
/// A dialect names the target database and knows how to quote identifiers for it.
pub trait Dialect: Send + Sync {
    /// Returns the dialect name. Part of the schema cache key.
    fn name(&self) -> &str;

    /// Quotes an identifier so it can be used in generated SQL.
    /// The default uses ANSI double quotes, doubling any embedded quote.
    fn escape_most_reserved_characters(&self, identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }
}
