mod cache;
mod endpoint;
mod error;
mod imp;
mod params;
mod route;
mod table;

pub use self::endpoint::Endpoint;
pub use self::error::RouterError;
pub use self::params::{Iter as ParamsIter, Params};
pub use self::route::{Route, RouteInfo, RouteMeta};
pub use self::table::RouteMatch;

use self::table::RouteTable;
use crate::config::RouterConfig;
use crate::middleware::BoxMiddleware;

/// Route registration builder and dispatch root.
///
/// Registration takes `&mut self`; lookup takes `&self`. Once built, a router
/// can be shared across threads (e.g. behind an `Arc`) and queried without
/// locking.
pub struct Router<R> {
    prefix: String,
    middleware: Vec<BoxMiddleware<R>>,
    table: RouteTable<R>,
    config: RouterConfig,
}
