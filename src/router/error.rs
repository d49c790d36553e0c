use crate::method::Method;

/// Registration-time failures. Dispatch never produces one of these: a lookup
/// that matches nothing returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("invalid route path {path:?}: {reason}")]
    InvalidRoutePath { path: String, reason: &'static str },

    #[error("duplicate param name {name:?} in route path {path:?}")]
    DuplicateParamName { path: String, name: String },

    #[error("route is already registered: {method} {path}")]
    DuplicateRouteRegistration { method: Method, path: String },
}

impl RouterError {
    pub(crate) fn invalid(path: &str, reason: &'static str) -> Self {
        Self::InvalidRoutePath {
            path: path.to_owned(),
            reason,
        }
    }
}
