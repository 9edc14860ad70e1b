//! Asterisk pattern diagrams.
//!
//! Pure functions mapping a row count to printable text. Each function
//! returns `n` lines joined by `\n` with no trailing newline; `n = 0`
//! yields the empty string (zero loop iterations).

/// Lower triangular pattern: line `i` (1-indexed) contains `i` asterisks.
///
/// # Examples
///
/// ```
/// use predecir::pattern::lower_triangular;
///
/// assert_eq!(lower_triangular(3), "*\n**\n***");
/// assert_eq!(lower_triangular(0), "");
/// ```
#[must_use]
pub fn lower_triangular(n: usize) -> String {
    (1..=n)
        .map(|i| "*".repeat(i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper triangular pattern: line `i` (1-indexed) contains `n - i + 1`
/// asterisks, starting at `n` and decreasing to 1.
///
/// # Examples
///
/// ```
/// use predecir::pattern::upper_triangular;
///
/// assert_eq!(upper_triangular(3), "***\n**\n*");
/// ```
#[must_use]
pub fn upper_triangular(n: usize) -> String {
    (1..=n)
        .rev()
        .map(|i| "*".repeat(i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Centered pyramid: line `i` (0-indexed) contains `n - i - 1` leading
/// spaces followed by `2i + 1` asterisks; the base row is `2n - 1` wide.
///
/// # Examples
///
/// ```
/// use predecir::pattern::pyramid;
///
/// assert_eq!(pyramid(3), "  *\n ***\n*****");
/// ```
#[must_use]
pub fn pyramid(n: usize) -> String {
    (0..n)
        .map(|i| format!("{}{}", " ".repeat(n - i - 1), "*".repeat(2 * i + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}
