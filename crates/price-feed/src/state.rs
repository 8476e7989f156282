//! Session catalog state
//!
//! Readers take an `Arc` snapshot; a rebuild swaps the whole catalog under
//! the write lock. There is no incremental update path.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use swap_engine::Catalog;

#[derive(Debug)]
pub struct CatalogState {
    catalog: RwLock<Arc<Catalog>>,
    build_count: AtomicU64,
    last_build: RwLock<Option<Instant>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Arc::new(Catalog::empty())),
            build_count: AtomicU64::new(0),
            last_build: RwLock::new(None),
        }
    }

    /// Current catalog; stays valid even if a rebuild lands afterwards
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Replace the catalog wholesale
    pub fn replace(&self, catalog: Catalog) {
        *self.catalog.write() = Arc::new(catalog);
        self.build_count.fetch_add(1, Ordering::Relaxed);
        *self.last_build.write() = Some(Instant::now());
    }

    pub fn is_loaded(&self) -> bool {
        self.last_build.read().is_some()
    }

    pub fn stats(&self) -> CatalogStateStats {
        CatalogStateStats {
            token_count: self.catalog.read().len(),
            build_count: self.build_count.load(Ordering::Relaxed),
            last_build_age: self.last_build.read().map(|t| t.elapsed()),
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about catalog state
#[derive(Debug, Clone)]
pub struct CatalogStateStats {
    pub token_count: usize,
    pub build_count: u64,
    pub last_build_age: Option<Duration>,
}
