use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

use dashmap::DashMap;

use crate::dialects::AnsiDialect;
use crate::error::{Result, SchemaError};
use crate::factory::TableSchemaFactory;
use crate::traits::{Dialect, Entity, EntityType};
use crate::types::{SchemaCacheKey, TableSchema};

static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();

/// Holds the current schema factory, the default dialect and the schema cache.
///
/// `SchemaRegistry::global()` is the process-wide instance. Isolated
/// registries can be created with `SchemaRegistry::new()`.
pub struct SchemaRegistry {
    current: Mutex<TableSchemaFactory>,
    default_dialect: RwLock<Arc<dyn Dialect>>,
    cache: DashMap<SchemaCacheKey, Arc<TableSchema>>,
}

impl SchemaRegistry {
    /// Create a registry with the default factory and the ANSI dialect.
    pub fn new() -> Self {
        Self {
            current: Mutex::new(TableSchemaFactory::new()),
            default_dialect: RwLock::new(Arc::new(AnsiDialect)),
            cache: DashMap::new(),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static SchemaRegistry {
        GLOBAL.get_or_init(SchemaRegistry::new)
    }

    fn lock_current(&self) -> MutexGuard<'_, TableSchemaFactory> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current factory.
    pub fn current(&self) -> TableSchemaFactory {
        self.lock_current().clone()
    }

    /// Replace the current factory with the updater's result.
    ///
    /// Reads and writes happen under one lock. If the updater returns `None`
    /// the previous factory stays in effect and a configuration error is returned.
    ///
    /// The updater runs while the lock is held. It must not call back into this
    /// registry's `current` or `set_current`, or it will deadlock.
    pub fn set_current<F>(&self, updater: F) -> Result<()>
    where
        F: FnOnce(&TableSchemaFactory) -> Option<TableSchemaFactory>,
    {
        let mut current = self.lock_current();
        match updater(&*current) {
            Some(factory) => {
                *current = factory;
                log::debug!("replaced current table schema factory");
                Ok(())
            }
            None => {
                log::warn!("table schema factory updater returned no factory");
                Err(SchemaError::Configuration(
                    "table schema factory updater returned no factory".to_string(),
                ))
            }
        }
    }

    /// Returns the dialect used when none is supplied.
    pub fn default_dialect(&self) -> Arc<dyn Dialect> {
        let dialect = self
            .default_dialect
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&dialect)
    }

    pub fn set_default_dialect<D>(&self, dialect: D)
    where
        D: Dialect + 'static,
    {
        let mut current = self
            .default_dialect
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        log::debug!("default dialect set to {}", dialect.name());
        *current = Arc::new(dialect);
    }

    /// Returns the cached schema for an entity type, building it on first use.
    ///
    /// Repeated calls with the same type and dialect name return the same instance.
    pub fn table_schema<E: Entity>(&self, dialect: Option<&dyn Dialect>) -> Arc<TableSchema> {
        let fallback;
        let dialect = match dialect {
            Some(dialect) => dialect,
            None => {
                fallback = self.default_dialect();
                fallback.as_ref()
            }
        };

        let entity = EntityType::of::<E>();
        let key = SchemaCacheKey::new(entity.id(), dialect.name());
        if let Some(schema) = self.cache.get(&key) {
            return Arc::clone(schema.value());
        }

        log::debug!(
            "schema cache miss for {} ({})",
            entity.name(),
            dialect.name()
        );
        let schema = Arc::new(self.current().make_table_schema::<E>(dialect));

        // First stored schema wins; a racing builder returns the stored one.
        let stored = self.cache.entry(key).or_insert(schema);
        Arc::clone(stored.value())
    }

    /// Returns the number of cached schemas.
    pub fn cached_schemas(&self) -> usize {
        self.cache.len()
    }

    /// Restore the default factory and dialect and drop every cached schema.
    pub fn reset(&self) {
        *self.lock_current() = TableSchemaFactory::new();
        *self
            .default_dialect
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(AnsiDialect);
        self.cache.clear();
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the schema for an entity type from the process-wide registry.
/// Uses the registry's default dialect when `dialect` is `None`.
pub fn get_table_schema<E: Entity>(dialect: Option<&dyn Dialect>) -> Arc<TableSchema> {
    SchemaRegistry::global().table_schema::<E>(dialect)
}
