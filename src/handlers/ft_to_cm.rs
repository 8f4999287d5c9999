use crate::error::RouteError;
use crate::handlers::{integer_arg, require_query};
use crate::server::response::HttpResponse;

pub const CM_PER_INCH: f64 = 2.54;

/// Format a double so it always carries a fractional digit.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals (`152.4`, `0.0`);
/// anything else uses an upper-case exponent (`6.5E10`).
pub fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exp)) if mantissa.contains('.') => format!("{}E{}", mantissa, exp),
            Some((mantissa, exp)) => format!("{}.0E{}", mantissa, exp),
            None => sci,
        }
    }
}

/// Feet plus inches, in centimeters.
pub fn to_centimeters(feet: i32, inches: i32) -> f64 {
    let total_inches = i64::from(feet) * 12 + i64::from(inches);
    total_inches as f64 * CM_PER_INCH
}

/// `GET /ft_to_cm?ft=<int>&in=<int>`
pub fn handle(query: &str) -> Result<HttpResponse, RouteError> {
    let params = require_query(query, "ft_to_cm")?;

    let feet = params.get("ft").ok_or_else(|| {
        RouteError::MissingArgument(
            "Does not contain correct query argument. Check if you inputted ft correctly.\n"
                .to_string(),
        )
    })?;
    let feet = integer_arg("ft", feet)?;

    let inches = params.get("in").ok_or_else(|| {
        RouteError::MissingArgument(
            "Does not contain correct query argument. Check if you inputted in correctly.\n"
                .to_string(),
        )
    })?;
    let inches = integer_arg("in", inches)?;

    let centimeters = to_centimeters(feet, inches);
    Ok(HttpResponse::ok_html(format!(
        "This height in centimeters is {}",
        format_double(centimeters)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(152.4), "152.4");
        assert_eq!(format_double(0.0), "0.0");
        assert_eq!(format_double(-2.54), "-2.54");
        assert_eq!(format_double(254.0), "254.0");
        assert_eq!(format_double(1e7), "1.0E7");
        assert_eq!(format_double(6.5e10), "6.5E10");
    }

    #[test]
    fn test_to_centimeters() {
        assert_eq!(to_centimeters(5, 0), 152.4);
        assert_eq!(to_centimeters(0, 1), 2.54);
        assert_eq!(to_centimeters(1, -12), 0.0);
    }

    #[test]
    fn test_feet_checked_before_inches() {
        let err = handle("ft=abc&in=xyz").unwrap_err();
        assert!(err.body().ends_with("argument: ft\n"));
        let err = handle("in=3").unwrap_err();
        assert!(err.body().contains("inputted ft correctly"));
    }
}
