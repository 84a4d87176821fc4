//! Shared helpers

pub mod datetime;

/// Case-insensitive substring test used by the search operations.
///
/// An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
