use super::{BoxFuture, Next, Outcome};
use crate::context::Context;

use std::future::Future;
use std::sync::Arc;

pub trait Handler<R>: Send + Sync + 'static {
    fn call(&self, ctx: Context) -> BoxFuture<'static, Outcome<R>>;
}

pub trait Middleware<R>: Send + Sync + 'static {
    fn call(&self, ctx: Context, next: Next<R>) -> BoxFuture<'static, Outcome<R>>;
}

pub type BoxHandler<R> = Arc<dyn Handler<R>>;
pub type BoxMiddleware<R> = Arc<dyn Middleware<R>>;

impl<R, F, Fut> Handler<R> for F
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    fn call(&self, ctx: Context) -> BoxFuture<'static, Outcome<R>> {
        Box::pin((self)(ctx))
    }
}

impl<R, F, Fut> Middleware<R> for F
where
    F: Fn(Context, Next<R>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    fn call(&self, ctx: Context, next: Next<R>) -> BoxFuture<'static, Outcome<R>> {
        Box::pin((self)(ctx, next))
    }
}

/// Boxes an async closure as middleware.
///
/// ```rust,ignore
/// let timing = middleware_fn(|ctx, next| async move {
///     let start = Instant::now();
///     let res = next.run(ctx).await;
///     tracing::info!(elapsed = ?start.elapsed());
///     res
/// });
/// ```
pub fn middleware_fn<R, F, Fut>(f: F) -> BoxMiddleware<R>
where
    R: 'static,
    F: Fn(Context, Next<R>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    Arc::new(f)
}
