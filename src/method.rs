use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The request methods a route can be registered for.
///
/// `All` is its own bucket: it is consulted only after the concrete method
/// found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
    All,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported request method: {method}")]
pub struct UnsupportedMethod {
    method: String,
}

impl Method {
    pub const COUNT: usize = 8;

    pub const VARIANTS: [Method; Self::COUNT] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::All,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::All => "ALL",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnsupportedMethod {
                method: s.to_owned(),
            })
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = UnsupportedMethod;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        let m = match *method {
            http::Method::GET => Method::Get,
            http::Method::POST => Method::Post,
            http::Method::PUT => Method::Put,
            http::Method::PATCH => Method::Patch,
            http::Method::DELETE => Method::Delete,
            http::Method::OPTIONS => Method::Options,
            http::Method::HEAD => Method::Head,
            ref other => {
                return Err(UnsupportedMethod {
                    method: other.as_str().to_owned(),
                })
            }
        };
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_variant_order() {
        for (i, m) in Method::VARIANTS.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!("ALL".parse::<Method>().unwrap(), Method::All);
        assert!("get".parse::<Method>().is_err());
    }

    #[test]
    fn from_http_method() {
        assert_eq!(Method::try_from(&http::Method::HEAD).unwrap(), Method::Head);
        let err = Method::try_from(&http::Method::TRACE).unwrap_err();
        assert_eq!(err.to_string(), "unsupported request method: TRACE");
    }
}
