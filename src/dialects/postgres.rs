use crate::traits::Dialect;

/// PostgreSQL dialect. Identifiers are quoted the ANSI way.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "PostgreSQL"
    }
}
