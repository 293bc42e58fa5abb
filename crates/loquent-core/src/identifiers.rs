//! SQL identifier quoting and sanitization utilities.
//!
//! Column and table references are quoted with ANSI double-quotes before
//! they reach the rendered statement. The engine's wildcard (`*`) and
//! dotted `table.column` references are preserved structurally: only the
//! identifier parts themselves are quoted.

use crate::error::{Error, Result};

/// Quote a single SQL identifier using ANSI double-quoting.
///
/// Embedded double-quotes are escaped by doubling them (`"` → `""`).
/// This function is safe against SQL injection for any input string.
///
/// # Examples
///
/// ```
/// use loquent_core::quote_ident;
///
/// assert_eq!(quote_ident("markets"), "\"markets\"");
/// assert_eq!(quote_ident("week\"day"), "\"week\"\"day\"");
/// assert_eq!(quote_ident("select"), "\"select\""); // SQL keyword
/// ```
#[inline]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a column or table reference, preserving `*` and dotted forms.
///
/// - `*` passes through unquoted.
/// - `table.column` becomes `"table"."column"`; `table.*` becomes
///   `"table".*`.
/// - A bare name becomes `"name"`.
/// - More than one `.` is not a supported reference shape and fails with
///   [`Error::MalformedIdentifier`].
///
/// # Examples
///
/// ```
/// use loquent_core::quote;
///
/// assert_eq!(quote("*").unwrap(), "*");
/// assert_eq!(quote("title").unwrap(), "\"title\"");
/// assert_eq!(quote("m.title").unwrap(), "\"m\".\"title\"");
/// assert_eq!(quote("m.*").unwrap(), "\"m\".*");
/// ```
pub fn quote(reference: &str) -> Result<String> {
    if reference == "*" {
        return Ok("*".to_string());
    }

    let mut parts = reference.split('.');
    let first = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (None, _) => Ok(quote_ident(first)),
        (Some("*"), None) => Ok(format!("{}.*", quote_ident(first))),
        (Some(column), None) => Ok(format!("{}.{}", quote_ident(first), quote_ident(column))),
        (Some(_), Some(_)) => Err(Error::MalformedIdentifier {
            reference: reference.to_string(),
        }),
    }
}

/// Quote a list of references element-wise, preserving order.
pub fn quote_all<S: AsRef<str>>(references: &[S]) -> Result<Vec<String>> {
    references.iter().map(|r| quote(r.as_ref())).collect()
}
