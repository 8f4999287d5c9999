use crate::error::RouteError;
use crate::handlers::integer_arg;
use crate::server::query::decode_query;
use crate::server::response::HttpResponse;
use http::StatusCode;

/// Value used for an operand that was not supplied.
pub const DEFAULT_OPERAND: i32 = 5;

/// `GET /multiply?num1=<int>&num2=<int>`
///
/// Both operands are optional. With no arguments at all the body reads
/// `Default Result is: 25`. A non-empty query naming neither operand is a 400
/// with an empty body. Non-integer operands are a 400 naming the operand.
pub fn handle(query: &str) -> Result<HttpResponse, RouteError> {
    if query.trim().is_empty() {
        let result = i64::from(DEFAULT_OPERAND) * i64::from(DEFAULT_OPERAND);
        return Ok(HttpResponse::ok_html(format!("Default Result is: {}", result)));
    }

    // Separators alone (`&`, `&&`) still count as a non-empty query.
    let params = decode_query(query)?;
    let num1 = params.get("num1");
    let num2 = params.get("num2");
    if num1.is_none() && num2.is_none() {
        return Ok(HttpResponse::html(StatusCode::BAD_REQUEST, Vec::new()));
    }

    let num1 = num1.map_or(Ok(DEFAULT_OPERAND), |v| integer_arg("num1", v))?;
    let num2 = num2.map_or(Ok(DEFAULT_OPERAND), |v| integer_arg("num2", v))?;
    let result = i64::from(num1) * i64::from(num2);
    Ok(HttpResponse::ok_html(format!("Result is: {}", result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(handle("").unwrap().body_text(), "Default Result is: 25");
        assert_eq!(handle("num1=3").unwrap().body_text(), "Result is: 15");
        assert_eq!(handle("num2=-2").unwrap().body_text(), "Result is: -10");
        assert_eq!(handle("num1=3&num2=4").unwrap().body_text(), "Result is: 12");
    }

    #[test]
    fn test_no_large_product_overflow() {
        let res = handle("num1=2147483647&num2=2").unwrap();
        assert_eq!(res.body_text(), "Result is: 4294967294");
    }

    #[test]
    fn test_unrelated_keys_are_empty_400() {
        let res = handle("foo=1").unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.body().is_empty());
    }

    #[test]
    fn test_separator_only_query_is_empty_400() {
        for query in ["&", "&&", "num3=1&"] {
            let res = handle(query).unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {}", query);
            assert!(res.body().is_empty(), "query: {}", query);
        }
        assert_eq!(handle("  ").unwrap().body_text(), "Default Result is: 25");
    }

    #[test]
    fn test_non_integer_is_400() {
        let err = handle("num1=abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.body().ends_with("argument: num1\n"));
    }
}
