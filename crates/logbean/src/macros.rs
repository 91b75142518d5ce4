//! Convenience macros for structured logging

/// Build a list of alternating key/value tokens
///
/// Keys are identifiers (`key = value`) or string literals (`"key" => value`).
///
/// ```rust
/// let tokens = logbean::kv!(user = 42, admin = false);
/// assert_eq!(tokens.len(), 4);
///
/// let tokens = logbean::kv!("http.status" => 503);
/// assert_eq!(tokens[0], "http.status");
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from(::std::stringify!($key)), $crate::Value::from($value)),+]
    };
    ($($key:literal => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($key), $crate::Value::from($value)),+]
    };
}
