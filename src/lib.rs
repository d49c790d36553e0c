//! Request routing and middleware dispatch.
//!
//! Routes are registered once on a [`Router`]: each registration compiles its
//! path into a [`Pattern`](pattern::Pattern) and its middleware plus handler
//! into a single [`Chain`]. At request time the only work is a cache check, a
//! static map lookup, a scan over the dynamic routes of one method, and the
//! chain call.
//!
//! ```rust,ignore
//! let mut router: Router<String> = Router::new();
//! router.middleware(middleware_fn(|ctx, next| async move {
//!     tracing::info!(path = %ctx.path());
//!     next.run(ctx).await
//! }));
//! router.get("/users/:id", show_user)?;
//! router.group("/admin", |admin| {
//!     admin.middleware(auth.clone());
//!     admin.get("/stats", stats)?;
//!     Ok(())
//! })?;
//!
//! let res = router.dispatch(Context::new(Method::Get, "/users/42")).unwrap().await?;
//! ```
//!
//! Lookup semantics:
//!
//! + static routes always win over dynamic ones
//! + dynamic routes are tried in registration order; the first match wins
//! + `ALL` routes are consulted only when the request method found nothing
//! + a trailing slash is not significant
//! + param values are taken verbatim, without percent-decoding

#![deny(unsafe_code)]

mod config;
mod context;
mod macros;
mod method;
mod router;

pub mod middleware;
pub mod pattern;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

pub use self::config::RouterConfig;
pub use self::context::Context;
pub use self::method::{Method, UnsupportedMethod};
pub use self::middleware::{
    middleware_fn, BoxError, BoxFuture, BoxHandler, BoxMiddleware, Chain, Handler, Middleware,
    Next, Outcome,
};
pub use self::router::{
    Endpoint, Params, ParamsIter, Route, RouteInfo, RouteMatch, RouteMeta, Router, RouterError,
};
