use crate::traits::Dialect;

/// Standard SQL dialect with double-quoted identifiers.
/// Used when no dialect is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
    fn name(&self) -> &str {
        "Ansi"
    }
}
