use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::str::FromStr;
use std::sync::Arc;

use smallvec::SmallVec;

type ParamVec = SmallVec<[(Arc<str>, String); 4]>;

/// Path params bound by a lookup, in path order.
///
/// Every lookup produces its own `Params`; nothing is shared with the route
/// table or the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: ParamVec,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if **k == *name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.buf.iter(),
        }
    }
}

impl Params {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            buf: SmallVec::with_capacity(cap),
        }
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: &str) {
        self.buf.push((name, value.to_owned()))
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Arc<str>, String)>,
}

macro_rules! delegate {
    ($method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let (n, v) = self.inner.$method()?;
            Some((&**n, v.as_str()))
        }
    };
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    delegate!(next);

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    delegate!(next_back);
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_parse() {
        let mut params = Params::new();
        params.push("uid".into(), "42");
        params.push("name".into(), "asd");

        assert_eq!(params.get("name"), Some("asd"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.parse::<u32>("uid"), Some(Ok(42)));
        assert!(params.parse::<u32>("name").unwrap().is_err());

        let v: Vec<(&str, &str)> = params.iter().rev().collect();
        assert_eq!(v, [("name", "asd"), ("uid", "42")]);
        assert_eq!(params.iter().len(), 2);
    }
}
