use super::cache::LastRouteCache;
use super::{Params, Route, RouterError};
use crate::context::Context;
use crate::method::Method;
use crate::middleware::{BoxFuture, Outcome};
use crate::pattern::normalize;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

const SLASH: char = '/';

/// A successful lookup: the route and the params bound for this request.
pub struct RouteMatch<R> {
    route: Arc<Route<R>>,
    params: Params,
}

impl<R> Clone for RouteMatch<R> {
    fn clone(&self) -> Self {
        Self {
            route: Arc::clone(&self.route),
            params: self.params.clone(),
        }
    }
}

impl<R> RouteMatch<R> {
    pub fn route(&self) -> &Route<R> {
        &self.route
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// Writes the params into `ctx` and runs the route's compiled chain.
    pub fn dispatch(self, mut ctx: Context) -> BoxFuture<'static, Outcome<R>> {
        ctx.set_params(self.params);
        self.route.call(ctx)
    }
}

impl<R> fmt::Debug for RouteMatch<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route)
            .field("params", &self.params)
            .finish()
    }
}

struct MethodTable<R> {
    statics: HashMap<Box<str>, Arc<Route<R>>>,
    dynamics: Vec<Arc<Route<R>>>,
}

impl<R> MethodTable<R> {
    fn new() -> Self {
        Self {
            statics: HashMap::new(),
            dynamics: Vec::new(),
        }
    }
}

/// Per-method static and dynamic partitions, plus the last-route cache that
/// fronts them.
pub(crate) struct RouteTable<R> {
    methods: [MethodTable<R>; Method::COUNT],
    routes: Vec<Arc<Route<R>>>,
    cache: LastRouteCache<R>,
}

impl<R> RouteTable<R> {
    pub(crate) fn new(cache: bool) -> Self {
        Self {
            methods: std::array::from_fn(|_| MethodTable::new()),
            routes: Vec::new(),
            cache: LastRouteCache::new(cache),
        }
    }

    pub(crate) fn routes(&self) -> &[Arc<Route<R>>] {
        &self.routes
    }

    pub(crate) fn into_routes(self) -> Vec<Arc<Route<R>>> {
        self.routes
    }

    pub(crate) fn insert(&mut self, route: Arc<Route<R>>) -> Result<(), RouterError> {
        self.cache.clear();

        let table = &mut self.methods[route.method().index()];
        if route.is_static() {
            match table.statics.entry(route.pattern().static_key().into()) {
                Entry::Occupied(_) => {
                    return Err(RouterError::DuplicateRouteRegistration {
                        method: route.method(),
                        path: route.path().to_owned(),
                    })
                }
                Entry::Vacant(e) => {
                    e.insert(Arc::clone(&route));
                }
            }
        } else {
            table.dynamics.push(Arc::clone(&route));
        }

        self.routes.push(route);
        Ok(())
    }

    /// Inserts a batch, or nothing if any static route in it collides with
    /// the table or with another member of the batch.
    pub(crate) fn insert_all(&mut self, routes: Vec<Arc<Route<R>>>) -> Result<(), RouterError> {
        let mut seen: HashSet<(Method, &str)> = HashSet::new();
        for route in routes.iter().filter(|r| r.is_static()) {
            let key = route.pattern().static_key();
            let taken = self.methods[route.method().index()]
                .statics
                .contains_key(key);
            if taken || !seen.insert((route.method(), key)) {
                return Err(RouterError::DuplicateRouteRegistration {
                    method: route.method(),
                    path: route.path().to_owned(),
                });
            }
        }
        drop(seen);

        for route in routes {
            self.insert(route)?;
        }
        Ok(())
    }

    /// Cache first, then the full lookup; the result is cached either way.
    pub(crate) fn find(&self, method: Method, path: &str) -> Option<RouteMatch<R>> {
        if let Some(hit) = self.cache.get(method, path) {
            tracing::trace!(method = %method, path = %path, found = hit.is_some(), "route cache hit");
            return hit;
        }
        let ret = self.lookup(method, path);
        tracing::trace!(method = %method, path = %path, found = ret.is_some(), "route cache miss");
        self.cache.put(method, path, &ret);
        ret
    }

    /// Static partition first, then dynamic routes in registration order;
    /// the same again for the `All` bucket when `method` found nothing.
    pub(crate) fn lookup(&self, method: Method, path: &str) -> Option<RouteMatch<R>> {
        let key = normalize(path)?;

        let order = [method, Method::All];
        let buckets = if method == Method::All {
            &order[..1]
        } else {
            &order[..]
        };

        let mut parts: Option<SmallVec<[&str; 8]>> = None;

        for &m in buckets {
            let table = &self.methods[m.index()];

            if let Some(route) = table.statics.get(key) {
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    params: Params::new(),
                });
            }

            if table.dynamics.is_empty() {
                continue;
            }

            let segs = parts.get_or_insert_with(|| split_parts(key));
            for route in &table.dynamics {
                if let Some(params) = route.pattern().match_parts(&segs[..]) {
                    return Some(RouteMatch {
                        route: Arc::clone(route),
                        params,
                    });
                }
            }
        }

        None
    }
}

#[inline]
fn split_parts(key: &str) -> SmallVec<[&str; 8]> {
    if key.is_empty() {
        SmallVec::new()
    } else {
        key.split(SLASH).collect()
    }
}
