//! Unwrapping of wire-level optionals.
//!
//! Candid `opt T` values reach JavaScript agents as zero-or-one-element
//! arrays and Rust agents as `Option<T>`. Both are iterators over at most one
//! element, so the helpers here accept anything `IntoIterator` and treat the
//! first element as the value.

/// Unwrap a zero-or-one-element sequence.
///
/// Returns `None` for an empty sequence and the first element otherwise.
///
/// ```
/// use harvestx_core::unwrap_opt;
///
/// assert_eq!(unwrap_opt(Vec::<u8>::new()), None);
/// assert_eq!(unwrap_opt(vec![7]), Some(7));
/// assert_eq!(unwrap_opt(Some("x")), Some("x"));
/// ```
pub fn unwrap_opt<I: IntoIterator>(opt: I) -> Option<I::Item> {
    opt.into_iter().next()
}

/// Unwrap a doubly nested optional (`opt opt T`).
///
/// The result is present only when both layers are present.
pub fn unwrap_double_opt<O>(optopt: O) -> Option<<O::Item as IntoIterator>::Item>
where
    O: IntoIterator,
    O::Item: IntoIterator,
{
    unwrap_opt(optopt).and_then(unwrap_opt)
}

/// Resolve an optional error text, falling back when it is absent or empty.
pub fn error_message_or<I>(error: I, fallback: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    unwrap_opt(error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_opt_empty_sequence() {
        assert_eq!(unwrap_opt(Vec::<String>::new()), None);
        assert_eq!(unwrap_opt(None::<u64>), None);
    }

    #[test]
    fn test_unwrap_opt_single_element() {
        assert_eq!(unwrap_opt(vec!["only".to_string()]), Some("only".to_string()));
        assert_eq!(unwrap_opt(Some(42_u64)), Some(42));
    }

    #[test]
    fn test_unwrap_opt_takes_first_of_malformed_sequence() {
        assert_eq!(unwrap_opt(vec![1, 2, 3]), Some(1));
    }

    #[test]
    fn test_unwrap_double_opt_both_empty() {
        assert_eq!(unwrap_double_opt(Vec::<Vec<u8>>::new()), None);
        assert_eq!(unwrap_double_opt(None::<Option<u8>>), None);
    }

    #[test]
    fn test_unwrap_double_opt_both_present() {
        assert_eq!(unwrap_double_opt(vec![vec![5_u8]]), Some(5));
        assert_eq!(unwrap_double_opt(Some(Some("profile"))), Some("profile"));
    }

    #[test]
    fn test_unwrap_double_opt_mixed() {
        // Outer present, inner empty: the call succeeded but there is no value.
        assert_eq!(unwrap_double_opt(vec![Vec::<u8>::new()]), None);
        assert_eq!(unwrap_double_opt(Some(None::<u8>)), None);
    }

    #[test]
    fn test_error_message_or() {
        assert_eq!(
            error_message_or(Some("Offer not found".to_string()), "Failed"),
            "Offer not found"
        );
        assert_eq!(error_message_or(None::<String>, "Failed"), "Failed");
        assert_eq!(error_message_or(Some(String::new()), "Failed"), "Failed");
        assert_eq!(error_message_or(Vec::<String>::new(), "Failed"), "Failed");
    }
}
