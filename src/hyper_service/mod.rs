//! Dispatcher over `hyper`: one lookup per request, then the matched chain.

mod service;

pub use self::service::{HyperContextExt, RequestBody, RouterService};

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;
