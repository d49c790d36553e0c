use super::{Request, Response};
use crate::context::Context;
use crate::method::Method;
use crate::middleware::{BoxError, BoxFuture, BoxHandler, Handler, Outcome};
use crate::router::Router;

use std::convert::TryFrom;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context as TaskContext, Poll};

use http::request::Parts;
use hyper::service::Service;
use hyper::{Body, StatusCode};

/// The request body, stored in the context extensions. Can be taken once.
#[derive(Debug)]
pub struct RequestBody(Mutex<Option<Body>>);

impl RequestBody {
    fn new(body: Body) -> Self {
        Self(Mutex::new(Some(body)))
    }

    pub fn take(&self) -> Option<Body> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// Access to the transport data the service puts into every [`Context`].
pub trait HyperContextExt {
    /// Method, uri, version and headers of the original request.
    fn head(&self) -> Option<&Parts>;

    fn take_body(&self) -> Option<Body>;
}

impl HyperContextExt for Context {
    fn head(&self) -> Option<&Parts> {
        self.get::<Parts>()
    }

    fn take_body(&self) -> Option<Body> {
        self.get::<RequestBody>()?.take()
    }
}

struct Shared {
    router: Router<Response>,
    fallback: BoxHandler<Response>,
}

/// A `hyper` service over a finished [`Router`].
///
/// Cloning is cheap; every connection can own a handle. Requests with a method
/// outside [`Method`] or without a matching route go to the fallback handler,
/// which sees `Method::All` for the former.
#[derive(Clone)]
pub struct RouterService {
    shared: Arc<Shared>,
}

impl RouterService {
    pub fn new(router: Router<Response>) -> Self {
        Self::with_fallback(router, not_found)
    }

    pub fn with_fallback(router: Router<Response>, fallback: impl Handler<Response>) -> Self {
        Self {
            shared: Arc::new(Shared {
                router,
                fallback: Arc::new(fallback),
            }),
        }
    }

    pub fn router(&self) -> &Router<Response> {
        &self.shared.router
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let (parts, body) = req.into_parts();
        let path = parts.uri.path().to_owned();

        let method = Method::try_from(&parts.method);
        let matched = match method {
            Ok(m) => self.shared.router.find_route(m, &path),
            Err(ref e) => {
                tracing::debug!(error = %e, "request method not routable");
                None
            }
        };

        let mut ctx = Context::new(method.unwrap_or(Method::All), path);
        ctx.insert(RequestBody::new(body));
        ctx.insert(parts);

        match matched {
            Some(m) => m.dispatch(ctx),
            None => self.shared.fallback.call(ctx),
        }
    }
}

async fn not_found(_: Context) -> Outcome<Response> {
    let res = hyper::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())?;
    Ok(res)
}
