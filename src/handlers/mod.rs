//! One module per route. Each exposes a `handle` function that runs the
//! route's validation steps in order and returns either the success response
//! or the first [`RouteError`] it hits.

pub mod cat;
pub mod file;
pub mod ft_to_cm;
pub mod github;
pub mod multiply;
pub mod random;
pub mod root;

use crate::error::RouteError;
use crate::server::query::{decode_query, QueryParams};
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional `-`, then one or more ASCII digits, nothing else.
static INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer regex should be valid"));

/// Whether `value` is written as a plain decimal integer.
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// Decode a route's query string, refusing an empty one.
///
/// An empty (or all-whitespace) query is the "missing arguments" case and
/// yields a 406 naming the route.
pub(crate) fn require_query(query: &str, route: &str) -> Result<QueryParams, RouteError> {
    if query.trim().is_empty() {
        return Err(RouteError::MissingArguments(format!(
            "Please put a argument for {}\n",
            route
        )));
    }
    Ok(decode_query(query)?)
}

/// Parse an `i32` argument that must match [`is_integer`].
pub(crate) fn integer_arg(name: &str, value: &str) -> Result<i32, RouteError> {
    let invalid = || {
        RouteError::InvalidArgument(format!(
            "Does not contain an integer for the argument: {}\n",
            name
        ))
    };
    if !is_integer(value) {
        return Err(invalid());
    }
    value.parse::<i32>().map_err(|_| invalid())
}
