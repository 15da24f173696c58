//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a value and a byte range

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The TokenValue
/// * `$start` - Byte offset of the first character of the lexeme
/// * `$end` - Byte offset one past the last character of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenValue::Integer(42), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $start:expr, $end:expr) => {
        Token {
            value: $value,
            span: Span::new($start, $end),
        }
    };
}
