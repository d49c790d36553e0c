use super::table::RouteTable;
use super::{Endpoint, Route, RouteInfo, RouteMatch, Router, RouterError};
use crate::config::RouterConfig;
use crate::context::Context;
use crate::method::Method;
use crate::middleware::{BoxFuture, BoxMiddleware, Handler, Outcome};
use crate::pattern::{join_paths, Pattern};

use std::fmt;
use std::sync::Arc;

use tracing::debug;

macro_rules! define_method {
    ($name:tt, $name_with:tt, $method:tt) => {
        pub fn $name(
            &mut self,
            path: &str,
            handler: impl Handler<R>,
        ) -> Result<&mut Self, RouterError> {
            self.route(Method::$method, path, Endpoint::new(handler))
        }

        pub fn $name_with(
            &mut self,
            path: &str,
            middleware: impl IntoIterator<Item = BoxMiddleware<R>>,
            handler: impl Handler<R>,
        ) -> Result<&mut Self, RouterError> {
            self.route(
                Method::$method,
                path,
                Endpoint::new(handler).with_all(middleware),
            )
        }
    };
}

impl<R: Send + 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Send + 'static> Router<R> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            prefix: String::new(),
            middleware: Vec::new(),
            table: RouteTable::new(config.is_last_route_cache_enabled()),
            config,
        }
    }

    /// A router whose routes all live under `prefix`.
    pub fn with_prefix(prefix: &str) -> Result<Self, RouterError> {
        let mut router = Self::new();
        router.prefix = checked_prefix("", prefix)?;
        Ok(router)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Appends router-level middleware. Only routes registered after this
    /// call pick it up.
    pub fn middleware(&mut self, middleware: BoxMiddleware<R>) -> &mut Self {
        self.middleware.push(middleware);
        self
    }

    pub fn route(
        &mut self,
        method: Method,
        path: &str,
        endpoint: Endpoint<R>,
    ) -> Result<&mut Self, RouterError> {
        let full = join_paths(&self.prefix, path)?;
        let pattern = Pattern::parse(&full)?;

        let Endpoint {
            middleware,
            handler,
            meta,
        } = endpoint;

        let mut stack = Vec::with_capacity(self.middleware.len() + middleware.len());
        stack.extend(self.middleware.iter().cloned());
        stack.extend(middleware);

        let route = Arc::new(Route::new(method, pattern, stack, handler, meta));
        self.table.insert(Arc::clone(&route))?;

        debug!(
            method = %method,
            path = %route.path(),
            depth = route.depth(),
            "route registered"
        );
        Ok(self)
    }

    /// Absorbs every route of `child` under `prefix`. Each absorbed route runs
    /// this router's middleware ahead of its own, and its chain is compiled
    /// again. Later changes to `child` are not seen here.
    pub fn mount(&mut self, prefix: &str, child: Router<R>) -> Result<&mut Self, RouterError> {
        self.mount_with(prefix, Vec::new(), child)
    }

    /// Like [`mount`](Self::mount), with extra middleware that runs after this
    /// router's middleware and before the child's.
    pub fn mount_with(
        &mut self,
        prefix: &str,
        middleware: impl IntoIterator<Item = BoxMiddleware<R>>,
        child: Router<R>,
    ) -> Result<&mut Self, RouterError> {
        let base = checked_prefix(&self.prefix, prefix)?;

        let mut outer = self.middleware.clone();
        outer.extend(middleware);

        let child_routes = child.table.into_routes();
        let mut routes = Vec::with_capacity(child_routes.len());
        for route in &child_routes {
            let pattern = Pattern::parse(&join_paths(&base, route.path())?)?;
            routes.push(Arc::new(route.rebase(pattern, &outer)));
        }

        let count = routes.len();
        self.table.insert_all(routes)?;

        debug!(prefix = %base, routes = count, "router mounted");
        Ok(self)
    }

    /// Runs `f` against a child router that starts with this router's prefix
    /// joined with `prefix` and a copy of this router's middleware, then
    /// absorbs whatever `f` registered. Nothing is absorbed if `f` fails.
    pub fn group(
        &mut self,
        prefix: &str,
        f: impl FnOnce(&mut Router<R>) -> Result<(), RouterError>,
    ) -> Result<&mut Self, RouterError> {
        let mut child = Router {
            prefix: checked_prefix(&self.prefix, prefix)?,
            middleware: self.middleware.clone(),
            table: RouteTable::new(self.config.is_last_route_cache_enabled()),
            config: self.config.clone(),
        };

        f(&mut child)?;

        let routes = child.table.into_routes();
        let count = routes.len();
        self.table.insert_all(routes)?;

        debug!(prefix = %child.prefix, routes = count, "route group absorbed");
        Ok(self)
    }

    define_method!(get, get_with, Get);
    define_method!(post, post_with, Post);
    define_method!(put, put_with, Put);
    define_method!(patch, patch_with, Patch);
    define_method!(delete, delete_with, Delete);
    define_method!(options, options_with, Options);
    define_method!(head, head_with, Head);
    define_method!(all, all_with, All);
}

impl<R> Router<R> {
    pub fn find_route(&self, method: Method, path: &str) -> Option<RouteMatch<R>> {
        self.table.find(method, path)
    }

    /// Looks up `ctx`'s method and path and starts the matched chain.
    /// `None` means no route matched.
    pub fn dispatch(&self, ctx: Context) -> Option<BoxFuture<'static, Outcome<R>>> {
        let matched = self.find_route(ctx.method(), ctx.path())?;
        tracing::trace!(method = %ctx.method(), path = %ctx.path(), "dispatch");
        Some(matched.dispatch(ctx))
    }

    /// Every registered route, in registration order.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.table.routes().iter().map(|r| r.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.table.routes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.routes().is_empty()
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("prefix", &self.prefix)
            .field("middleware", &self.middleware.len())
            .field("routes", &self.table.routes())
            .field("config", &self.config)
            .finish()
    }
}

/// Joins and validates a prefix, returning its canonical form (`""` for the
/// root so that joining never produces a double slash).
fn checked_prefix(base: &str, prefix: &str) -> Result<String, RouterError> {
    let joined = join_paths(base, prefix)?;
    let pattern = Pattern::parse(&joined)?;
    match pattern.path() {
        "/" => Ok(String::new()),
        p => Ok(p.to_owned()),
    }
}
