use std::fmt;

/// The closed set of routes the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    RandomJson,
    RandomPage,
    Cat,
    FtToCm,
    File,
    Multiply,
    Github,
    Unrecognized,
}

impl Route {
    /// Literal token stripped from the path before query decoding, for the
    /// parametrized routes.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Route::Cat => Some("cat?"),
            Route::FtToCm => Some("ft_to_cm?"),
            Route::File => Some("file/"),
            Route::Multiply => Some("multiply?"),
            Route::Github => Some("github?"),
            Route::Root | Route::RandomJson | Route::RandomPage | Route::Unrecognized => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Root => "root",
            Route::RandomJson => "random-json",
            Route::RandomPage => "random-page",
            Route::Cat => "cat",
            Route::FtToCm => "ft-to-cm",
            Route::File => "file",
            Route::Multiply => "multiply",
            Route::Github => "github",
            Route::Unrecognized => "unrecognized",
        }
    }

    /// Remove every occurrence of this route's token from `path`.
    ///
    /// Whatever surrounds the token stays in place, so `x/cat?kitty=1`
    /// becomes `x/kitty=1`.
    pub fn strip_token(self, path: &str) -> String {
        match self.token() {
            Some(token) => path.replace(token, ""),
            None => path.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Substring routes, in priority order.
const CONTAINS_ROUTES: [Route; 5] = [
    Route::Cat,
    Route::FtToCm,
    Route::File,
    Route::Multiply,
    Route::Github,
];

/// Select the route for a raw request path.
#[must_use]
pub fn classify(path: &str) -> Route {
    if path.is_empty() {
        return Route::Root;
    }
    if path.eq_ignore_ascii_case("json") {
        return Route::RandomJson;
    }
    if path.eq_ignore_ascii_case("random") {
        return Route::RandomPage;
    }
    CONTAINS_ROUTES
        .into_iter()
        .find(|route| route.token().is_some_and(|token| path.contains(token)))
        .unwrap_or(Route::Unrecognized)
}
