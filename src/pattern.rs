//! Path pattern compiler.
//!
//! A route path such as `/users/:id/posts/:post_id` is split on `/` into
//! literal and param segments. Leading and trailing slashes are not
//! significant, so `/users/` and `/users` compile to the same pattern and the
//! same lookup key. Empty interior segments, empty param names and `*`
//! segments are rejected.

use crate::router::{Params, RouterError};

use std::sync::Arc;

use smallvec::SmallVec;

const COLON: char = ':';
const STAR: char = '*';
const SLASH: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(Box<str>),
    Param(Arc<str>),
}

/// A compiled route path.
#[derive(Debug, Clone)]
pub struct Pattern {
    path: Box<str>,
    segments: SmallVec<[Segment; 4]>,
    param_num: usize,
}

impl Pattern {
    pub fn parse(path: &str) -> Result<Self, RouterError> {
        if !path.is_empty() && !path.starts_with(SLASH) {
            return Err(RouterError::invalid(path, "route path must start with '/'"));
        }
        let body = normalize(path).ok_or_else(|| RouterError::invalid(path, "empty path segment"))?;

        let mut segments: SmallVec<[Segment; 4]> = SmallVec::new();
        let mut param_num = 0;

        if !body.is_empty() {
            for part in body.split(SLASH) {
                if part.is_empty() {
                    return Err(RouterError::invalid(path, "empty path segment"));
                }
                if part.starts_with(STAR) {
                    return Err(RouterError::invalid(
                        path,
                        "wildcard segments are not supported",
                    ));
                }
                if part.contains(|c| c == '?' || c == '#') {
                    return Err(RouterError::invalid(
                        path,
                        "query or fragment in route path",
                    ));
                }
                match part.strip_prefix(COLON) {
                    Some("") => {
                        return Err(RouterError::invalid(path, "param name can not be empty"))
                    }
                    Some(name) => {
                        let taken = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if &**n == name));
                        if taken {
                            return Err(RouterError::DuplicateParamName {
                                path: path.to_owned(),
                                name: name.to_owned(),
                            });
                        }
                        param_num += 1;
                        segments.push(Segment::Param(Arc::from(name)));
                    }
                    None => segments.push(Segment::Literal(part.into())),
                }
            }
        }

        let mut canonical = String::with_capacity(body.len() + 1);
        canonical.push(SLASH);
        canonical.push_str(body);

        Ok(Self {
            path: canonical.into(),
            segments,
            param_num,
        })
    }

    /// The canonical form: a single leading slash, no trailing slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_static(&self) -> bool {
        self.param_num == 0
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Key of the static partition, comparable with [`normalize`] output.
    pub(crate) fn static_key(&self) -> &str {
        &self.path[1..]
    }

    /// Matches pre-split request segments. Literals compare case-sensitively,
    /// params take any non-empty segment verbatim.
    pub(crate) fn match_parts(&self, parts: &[&str]) -> Option<Params> {
        if parts.len() != self.segments.len() {
            return None;
        }
        for (seg, &part) in self.segments.iter().zip(parts) {
            let ok = match seg {
                Segment::Literal(text) => **text == *part,
                Segment::Param(_) => !part.is_empty(),
            };
            if !ok {
                return None;
            }
        }

        let mut params = Params::with_capacity(self.param_num);
        for (seg, &part) in self.segments.iter().zip(parts) {
            if let Segment::Param(name) = seg {
                params.push(name.clone(), part);
            }
        }
        Some(params)
    }
}

/// Strips one leading and one trailing slash. Returns `None` for `//`, which
/// would otherwise collapse onto the root.
#[inline]
pub(crate) fn normalize(path: &str) -> Option<&str> {
    let p = path.strip_prefix(SLASH).unwrap_or(path);
    match p.strip_suffix(SLASH) {
        Some("") => None,
        Some(p) => Some(p),
        None => Some(p),
    }
}

/// Composes a group or mount prefix with a route path.
pub(crate) fn join_paths(prefix: &str, path: &str) -> Result<String, RouterError> {
    for p in [prefix, path] {
        if !p.is_empty() && !p.starts_with(SLASH) {
            return Err(RouterError::invalid(p, "route path must start with '/'"));
        }
    }
    let prefix = prefix.strip_suffix(SLASH).unwrap_or(prefix);
    let joined = match path {
        "" | "/" if prefix.is_empty() => String::from("/"),
        "" | "/" => prefix.to_owned(),
        _ => {
            let mut s = String::with_capacity(prefix.len() + path.len());
            s.push_str(prefix);
            s.push_str(path);
            s
        }
    };
    Ok(joined)
}
