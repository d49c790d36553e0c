//! Middleware, handlers and the chain compiler.
//!
//! A middleware has the shape `(Context, Next) -> Outcome`; a handler has the
//! shape `(Context) -> Outcome`. Both are async. A route's middleware list and
//! its handler are folded into a single [`Chain`] when the route is
//! registered, so a request never walks the list or rebuilds continuations.

mod chain;
mod handler;

pub use self::chain::{Chain, Next};
pub use self::handler::{middleware_fn, BoxHandler, BoxMiddleware, Handler, Middleware};

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// What every stage of a chain resolves to. Errors are never inspected by the
/// router; they travel back out through the stages unchanged.
pub type Outcome<R> = Result<R, BoxError>;
