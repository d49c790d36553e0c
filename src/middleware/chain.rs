use super::{BoxFuture, BoxHandler, BoxMiddleware, Outcome};
use crate::context::Context;

use std::fmt;
use std::sync::Arc;

type Continuation<R> = Arc<dyn Fn(Context) -> BoxFuture<'static, Outcome<R>> + Send + Sync>;

/// The remainder of a chain, as seen by one middleware.
pub struct Next<R> {
    inner: Continuation<R>,
}

impl<R> Clone for Next<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> Next<R> {
    pub fn run(self, ctx: Context) -> BoxFuture<'static, Outcome<R>> {
        (self.inner)(ctx)
    }
}

impl<R> fmt::Debug for Next<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Next")
    }
}

/// Middleware list and handler composed into one callable.
///
/// Built by folding the list right-to-left around the handler, so
/// `[m1, m2]` + `h` behaves as `m1(ctx, || m2(ctx, || h(ctx)))`. The chain
/// holds no per-request state and may be invoked concurrently.
pub struct Chain<R> {
    entry: Continuation<R>,
    depth: usize,
}

impl<R> Clone for Chain<R> {
    fn clone(&self) -> Self {
        Self {
            entry: Arc::clone(&self.entry),
            depth: self.depth,
        }
    }
}

impl<R: 'static> Chain<R> {
    pub fn compile(middleware: &[BoxMiddleware<R>], handler: &BoxHandler<R>) -> Self {
        let handler = Arc::clone(handler);
        let terminal: Continuation<R> = Arc::new(move |ctx: Context| handler.call(ctx));

        let entry = middleware.iter().rev().fold(terminal, |next, mw| {
            let mw = Arc::clone(mw);
            let stage: Continuation<R> = Arc::new(move |ctx: Context| {
                let next = Next {
                    inner: Arc::clone(&next),
                };
                mw.call(ctx, next)
            });
            stage
        });

        Self {
            entry,
            depth: middleware.len(),
        }
    }
}

impl<R> Chain<R> {
    pub fn call(&self, ctx: Context) -> BoxFuture<'static, Outcome<R>> {
        (self.entry)(ctx)
    }

    /// Number of middleware stages ahead of the handler.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<R> fmt::Debug for Chain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("depth", &self.depth).finish()
    }
}
