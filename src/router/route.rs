use crate::context::Context;
use crate::method::Method;
use crate::middleware::{BoxFuture, BoxHandler, BoxMiddleware, Chain, Outcome};
use crate::pattern::Pattern;

use std::fmt;
use std::sync::Arc;

/// Descriptive data carried for documentation; never used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub auth: bool,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }
}

/// Introspection view of a registered route.
///
/// `path` is the canonical form the route matches on, not the string passed
/// at registration: prefixes are joined in, a trailing slash is dropped and
/// the empty path reads as `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: Method,
    pub path: String,
    pub meta: RouteMeta,
}

/// A registered route. Immutable once built: its chain was compiled from a
/// snapshot of the middleware in effect at registration.
pub struct Route<R> {
    method: Method,
    pattern: Pattern,
    middleware: Arc<[BoxMiddleware<R>]>,
    handler: BoxHandler<R>,
    chain: Chain<R>,
    meta: RouteMeta,
}

impl<R: 'static> Route<R> {
    pub(crate) fn new(
        method: Method,
        pattern: Pattern,
        middleware: Vec<BoxMiddleware<R>>,
        handler: BoxHandler<R>,
        meta: RouteMeta,
    ) -> Self {
        let chain = Chain::compile(&middleware, &handler);
        Self {
            method,
            pattern,
            middleware: middleware.into(),
            handler,
            chain,
            meta,
        }
    }

    /// Copies this route under a new pattern with `outer` running ahead of its
    /// own middleware. The chain is compiled again from scratch.
    pub(crate) fn rebase(&self, pattern: Pattern, outer: &[BoxMiddleware<R>]) -> Self {
        let mut middleware = Vec::with_capacity(outer.len() + self.middleware.len());
        middleware.extend(outer.iter().cloned());
        middleware.extend(self.middleware.iter().cloned());
        Self::new(
            self.method,
            pattern,
            middleware,
            Arc::clone(&self.handler),
            self.meta.clone(),
        )
    }
}

impl<R> Route<R> {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        self.pattern.path()
    }

    pub fn is_static(&self) -> bool {
        self.pattern.is_static()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    pub fn info(&self) -> RouteInfo {
        RouteInfo {
            method: self.method,
            path: self.pattern.path().to_owned(),
            meta: self.meta.clone(),
        }
    }

    /// Runs the compiled chain.
    pub fn call(&self, ctx: Context) -> BoxFuture<'static, Outcome<R>> {
        self.chain.call(ctx)
    }

    /// Number of middleware stages ahead of the handler.
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.pattern.path())
            .field("depth", &self.chain.depth())
            .field("meta", &self.meta)
            .finish()
    }
}
