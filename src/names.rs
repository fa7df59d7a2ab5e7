//! Filesystem-safe names derived from a title slug.

/// `two-sum` -> `two_sum`
pub fn directory_name(slug: &str) -> String {
    slug.to_lowercase().replace('-', "_")
}

/// `two-sum` -> `twosum`
pub fn module_name(slug: &str) -> String {
    slug.to_lowercase().replace('-', "")
}
