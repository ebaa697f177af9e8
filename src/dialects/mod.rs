mod ansi;
mod mysql;
mod postgres;
mod sql_server;

pub use self::ansi::AnsiDialect;
pub use self::mysql::MySqlDialect;
pub use self::postgres::PostgresDialect;
pub use self::sql_server::SqlServerDialect;
