use super::RouteMeta;
use crate::middleware::{BoxHandler, BoxMiddleware, Handler};

use std::sync::Arc;

/// Everything a single registration contributes: route-level middleware in
/// call order, the handler, and descriptive metadata.
pub struct Endpoint<R> {
    pub(super) middleware: Vec<BoxMiddleware<R>>,
    pub(super) handler: BoxHandler<R>,
    pub(super) meta: RouteMeta,
}

impl<R: 'static> Endpoint<R> {
    pub fn new(handler: impl Handler<R>) -> Self {
        Self::from_boxed(Arc::new(handler))
    }

    pub fn from_boxed(handler: BoxHandler<R>) -> Self {
        Self {
            middleware: Vec::new(),
            handler,
            meta: RouteMeta::default(),
        }
    }

    /// Appends one route-level middleware. Runs after every middleware
    /// already attached to this endpoint.
    pub fn with(mut self, middleware: BoxMiddleware<R>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn with_all(mut self, middleware: impl IntoIterator<Item = BoxMiddleware<R>>) -> Self {
        self.middleware.extend(middleware);
        self
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }
}
