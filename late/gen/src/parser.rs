//! Path template helpers.
//!
//! Paths use `{param}` placeholders for path parameters. Placeholder
//! detection lives in `late-define` so the client substitutes exactly the
//! segments the generator treats as parameters.

pub use late_define::placeholder_name;

/// Returns `true` for API version segments such as `v1` or `v12`.
pub fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// Splits a path into its non-empty segments.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_segments() {
        assert!(is_version_segment("v1"));
        assert!(is_version_segment("v20"));
        assert!(!is_version_segment("v"));
        assert!(!is_version_segment("videos"));
        assert!(!is_version_segment("V1"));
    }

    #[test]
    fn segments_skip_empty_parts() {
        let segments: Vec<_> = path_segments("//v1/posts/").collect();
        assert_eq!(segments, vec!["v1", "posts"]);
    }

    #[test]
    fn placeholders_in_a_path_template() {
        let params: Vec<_> = path_segments("/v1/accounts/{accountId}/reviews/{reviewId}/reply")
            .filter_map(placeholder_name)
            .collect();
        assert_eq!(params, vec!["accountId", "reviewId"]);
    }
}
