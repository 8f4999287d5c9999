//! # Router Module
//!
//! Classifies a parsed request path into one of the server's built-in routes.
//!
//! ## Overview
//!
//! Routing is a pure function of the raw, undecoded path (the request-line
//! token with its leading `/` removed). Checks run in a fixed priority order
//! and the first match wins:
//!
//! | # | Check                                   | Route          |
//! |---|-----------------------------------------|----------------|
//! | 1 | path is empty                           | `Root`         |
//! | 2 | equals `json` (ASCII case-insensitive)  | `RandomJson`   |
//! | 3 | equals `random` (ASCII case-insensitive)| `RandomPage`   |
//! | 4 | contains `cat?`                         | `Cat`          |
//! | 5 | contains `ft_to_cm?`                    | `FtToCm`       |
//! | 6 | contains `file/`                        | `File`         |
//! | 7 | contains `multiply?`                    | `Multiply`     |
//! | 8 | contains `github?`                      | `Github`       |
//! | 9 | anything else                           | `Unrecognized` |
//!
//! The containment checks are not anchored: `x/cat?kitty=1/github?query=y`
//! is a `Cat` request because that check runs first.
//!
//! ## Example
//!
//! ```rust
//! use funserver::router::{classify, Route};
//!
//! assert_eq!(classify(""), Route::Root);
//! assert_eq!(classify("JSON"), Route::RandomJson);
//! assert_eq!(classify("multiply?num1=3"), Route::Multiply);
//! assert_eq!(classify("favicon.ico"), Route::Unrecognized);
//! ```

mod core;

pub use core::{classify, Route};
