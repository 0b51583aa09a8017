//! The canonical textual description of a component list.
//!
//! A description is a comma-separated list of tokens, each either `p` for the clique `K_p` or
//! `(p,q)` for `K_{p,q}`, in canonical order. The empty list is written `None`:
//!
//! ```rust
//! # use zero_divisor_catalog::component::*;
//! let list = ComponentList::new(vec![Component::bipartite(2, 8), Component::clique(4), Component::bipartite(1, 2)]);
//! assert_eq!(list.to_string(), "4,(1,2),(2,8)");
//! assert_eq!("4,(1,2),(2,8)".parse::<ComponentList>().unwrap(), list);
//! assert_eq!(ComponentList::default().to_string(), "None");
//! ```
use super::{Component, ComponentList};
use crate::error::{CatalogError, Result};

use core::fmt;
use core::str::FromStr;

/// The description of an empty component list.
pub const EMPTY_DESCRIPTION: &str = "None";

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Clique { p } => write!(f, "{p}"),
            Component::Bipartite { p, q } => write!(f, "({p},{q})"),
        }
    }
}

impl fmt::Display for ComponentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_DESCRIPTION);
        }
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

fn parse_size(token: &str, s: &str) -> Result<usize> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| CatalogError::parse(token, format!("'{}' is not a size", s.trim())))?;
    if size == 0 {
        return Err(CatalogError::parse(token, "sizes must be positive"));
    }
    Ok(size)
}

impl FromStr for Component {
    type Err = CatalogError;

    /// Parse `p` or `(p,q)`. Whitespace is ignored and the parts of a pair may be given in either
    /// order.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        match token.strip_prefix('(') {
            Some(rest) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| CatalogError::parse(token, "missing ')'"))?;
                let parts: Vec<&str> = inner.split(',').collect();
                match parts.as_slice() {
                    [a, b] => Ok(Component::bipartite(
                        parse_size(token, a)?,
                        parse_size(token, b)?,
                    )),
                    _ => Err(CatalogError::parse(
                        token,
                        "a bipartite component has exactly two sizes",
                    )),
                }
            }
            None if token.contains(')') => Err(CatalogError::parse(token, "unmatched ')'")),
            None => Ok(Component::clique(parse_size(token, token)?)),
        }
    }
}

/// Split on commas which are not inside parentheses.
fn split_top_level(s: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| CatalogError::parse(s, "unmatched ')'"))?;
            }
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(CatalogError::parse(s, "unclosed '('"));
    }
    parts.push(&s[start..]);
    Ok(parts)
}

impl FromStr for ComponentList {
    type Err = CatalogError;

    /// Parse a description. `None` and the empty string both denote the empty list, and the
    /// parsed components are put into canonical order.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s == EMPTY_DESCRIPTION {
            return Ok(ComponentList::default());
        }
        split_top_level(s)?
            .into_iter()
            .map(|token| {
                if token.trim().is_empty() {
                    Err(CatalogError::parse(s, "empty token"))
                } else {
                    token.parse::<Component>()
                }
            })
            .collect::<Result<Vec<_>>>()
            .map(ComponentList::new)
    }
}
