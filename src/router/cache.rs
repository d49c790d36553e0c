use super::RouteMatch;
use crate::method::Method;

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Single-slot memo of the most recent lookup, misses included.
///
/// The slot holds an immutable snapshot behind an atomically swapped `Arc`:
/// readers never block, and concurrent misses simply race to overwrite it.
pub(crate) struct LastRouteCache<R> {
    enabled: bool,
    slot: ArcSwapOption<Entry<R>>,
}

struct Entry<R> {
    method: Method,
    path: Box<str>,
    result: Option<RouteMatch<R>>,
}

impl<R> LastRouteCache<R> {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            slot: ArcSwapOption::empty(),
        }
    }

    /// Outer `None` is a cache miss; `Some(None)` is a cached not-found.
    pub(crate) fn get(&self, method: Method, path: &str) -> Option<Option<RouteMatch<R>>> {
        if !self.enabled {
            return None;
        }
        let guard = self.slot.load();
        match &*guard {
            Some(e) if e.method == method && *e.path == *path => Some(e.result.clone()),
            _ => None,
        }
    }

    pub(crate) fn put(&self, method: Method, path: &str, result: &Option<RouteMatch<R>>) {
        if !self.enabled {
            return;
        }
        self.slot.store(Some(Arc::new(Entry {
            method,
            path: path.into(),
            result: result.clone(),
        })));
    }

    pub(crate) fn clear(&self) {
        self.slot.store(None);
    }
}
