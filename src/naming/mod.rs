mod default;

pub use self::default::{DefaultColumnNameFactory, DefaultTableNameFactory};
