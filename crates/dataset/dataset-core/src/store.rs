//! Lazily-initialized, read-only handle to the loaded table.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use dataset_spi::{BirthTable, Result, TableSource};

/// One-time-initialized cache of the loaded table.
///
/// The first call performs the load; every later call returns the same shared
/// handle (or the same load error) without touching the file again. There is
/// no invalidation: the source is static for the process lifetime.
pub struct TableStore {
    cell: OnceCell<Result<Arc<BirthTable>>>,
}

impl TableStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Load through the source on first use, then return the cached handle.
    pub fn get_or_load(&self, source: &dyn TableSource) -> Result<Arc<BirthTable>> {
        self.cell
            .get_or_init(|| {
                tracing::debug!(source = source.name(), "initializing table store");
                source.load().map(Arc::new)
            })
            .clone()
    }

    /// Whether a load (successful or not) has already happened.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide store behind [`shared_table`].
static GLOBAL_STORE: TableStore = TableStore::new();

/// Load the table once for the whole process and return the shared handle.
///
/// The source passed on the first call wins; later calls ignore their
/// argument and return the cached result.
pub fn shared_table(source: &dyn TableSource) -> Result<Arc<BirthTable>> {
    GLOBAL_STORE.get_or_load(source)
}
