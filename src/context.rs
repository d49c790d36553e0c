use crate::method::Method;
use crate::router::Params;

use http::Extensions;

/// Per-request state handed through a compiled chain.
///
/// The router only writes `params`; everything the transport or a middleware
/// wants to pass downstream goes into the extensions.
#[derive(Debug)]
pub struct Context {
    method: Method,
    path: String,
    params: Params,
    extensions: Extensions,
}

impl Context {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            extensions: Extensions::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.extensions.insert(val)
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }
}
