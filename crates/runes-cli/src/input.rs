//! Code point tokens from the command line
//!
//! `65`, `0x41`, `U+41` and ranges such as `0x41-0x5A` or `40-60`.

use runes_core::{error::Result, is_valid_rune, RunesError, MAX_CODE_POINT};

/// One thing the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Printed as given, even when it is not a scalar value
    Single(u32),
    /// Inclusive; values that are not scalar values are skipped
    Range(u32, u32),
}

/// Parse one positional argument.
pub fn parse_token(token: &str) -> Result<Request> {
    match token.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse_code_point(start)?, parse_code_point(end)?);
            if start > end {
                return Err(RunesError::InvalidInput(format!(
                    "range {token} ends before it starts"
                )));
            }
            Ok(Request::Range(start, end))
        },
        None => parse_code_point(token).map(Request::Single),
    }
}

/// Parse a decimal, `0x` or `u+` number.
pub fn parse_code_point(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let invalid = || RunesError::InvalidInput(format!("invalid code point: {text:?}"));
    let lower = trimmed.to_ascii_lowercase();
    let (digits, radix) = match lower
        .strip_prefix("0x")
        .or_else(|| lower.strip_prefix("u+"))
    {
        Some(hex) => (hex, 16),
        None => (lower.as_str(), 10),
    };
    // from_str_radix takes a leading sign
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// The code points a list of requests expands to, in request order.
pub fn expand(requests: &[Request]) -> impl Iterator<Item = u32> + '_ {
    requests.iter().flat_map(|request| {
        let (from, to, keep_invalid) = match *request {
            Request::Single(value) => (value, value, true),
            Request::Range(from, to) => (from, to.min(MAX_CODE_POINT), false),
        };
        // an empty range when `from` is already past the domain
        (from..=to).filter(move |&rune| keep_invalid || is_valid_rune(rune))
    })
}

/// Every scalar value, ascending.
pub fn all_runes() -> impl Iterator<Item = u32> {
    (0..=MAX_CODE_POINT).filter(|&rune| is_valid_rune(rune))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_and_hex_tokens() {
        assert_eq!(parse_token("65").unwrap(), Request::Single(65));
        assert_eq!(parse_token("0x41").unwrap(), Request::Single(0x41));
        assert_eq!(parse_token("0X41").unwrap(), Request::Single(0x41));
        assert_eq!(parse_token("u+1f970").unwrap(), Request::Single(0x1F970));
        assert_eq!(parse_token("U+1F970").unwrap(), Request::Single(0x1F970));
    }

    #[test]
    fn test_range_tokens() {
        assert_eq!(parse_token("40-60").unwrap(), Request::Range(40, 60));
        assert_eq!(parse_token("0x41-u+5a").unwrap(), Request::Range(0x41, 0x5A));
        assert_eq!(parse_token("7-7").unwrap(), Request::Range(7, 7));
    }

    #[test]
    fn test_bad_tokens() {
        assert!(parse_token("zz").is_err());
        assert!(parse_token("0x").is_err());
        assert!(parse_token("60-40").is_err());
        assert!(parse_token("1-2-3").is_err());
        assert!(parse_token("99999999999").is_err());
    }

    #[test]
    fn test_signed_tokens_are_rejected() {
        assert!(parse_token("+65").is_err());
        assert!(parse_token("0x+41").is_err());
        assert!(parse_token("u++41").is_err());
        assert!(parse_token("+1-+2").is_err());
    }

    #[test]
    fn test_out_of_domain_single_is_kept() {
        let requests = [Request::Single(0x110000), Request::Single(0xD800)];
        assert_eq!(expand(&requests).collect::<Vec<_>>(), vec![0x110000, 0xD800]);
    }

    #[test]
    fn test_ranges_skip_invalid_values() {
        let requests = [Request::Range(0xD7FF, 0xE000), Request::Range(0x10FFFF, 0x110001)];
        assert_eq!(
            expand(&requests).collect::<Vec<_>>(),
            vec![0xD7FF, 0xE000, 0x10FFFF]
        );
    }

    #[test]
    fn test_range_end_is_clamped_to_domain() {
        let requests = [Request::Range(0x10FFFE, u32::MAX)];
        assert_eq!(expand(&requests).collect::<Vec<_>>(), vec![0x10FFFE, 0x10FFFF]);

        let past = [Request::Range(0x110000, u32::MAX)];
        assert_eq!(expand(&past).count(), 0);
    }

    #[test]
    fn test_request_order_is_kept() {
        let requests = [Request::Single(0x43), Request::Range(0x41, 0x42)];
        assert_eq!(expand(&requests).collect::<Vec<_>>(), vec![0x43, 0x41, 0x42]);
    }

    #[test]
    fn test_all_runes_skips_surrogates() {
        assert_eq!(all_runes().count(), 0x110000 - 0x800);
        assert_eq!(all_runes().last(), Some(MAX_CODE_POINT));
    }
}
