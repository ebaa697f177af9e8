/// How a mapped column participates in generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnUsage {
    /// Ordinary read/write column.
    Column,
    /// Identity column assigned by the database on insert.
    GeneratedColumn,
    /// Column computed by the database; never written.
    ComputedColumn,
    /// Primary key supplied by the application.
    NotGeneratedPrimaryKey,
    /// Primary key assigned by the database.
    ComputedPrimaryKey,
    /// Unwritable non-key column.
    ComputedColumnNonKey,
}

impl ColumnUsage {
    pub fn is_primary_key(&self) -> bool {
        matches!(self, ColumnUsage::NotGeneratedPrimaryKey | ColumnUsage::ComputedPrimaryKey)
    }

    /// Returns true if the column appears in INSERT statements.
    pub fn is_insertable(&self) -> bool {
        matches!(self, ColumnUsage::Column | ColumnUsage::NotGeneratedPrimaryKey)
    }

    /// Returns true if the column appears in the SET list of UPDATE statements.
    pub fn is_updatable(&self) -> bool {
        matches!(self, ColumnUsage::Column)
    }

    pub fn is_database_generated(&self) -> bool {
        !matches!(self, ColumnUsage::Column | ColumnUsage::NotGeneratedPrimaryKey)
    }
}
