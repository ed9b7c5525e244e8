//! Route patterns for request spans.

use uuid::Uuid;

/// Replace uuid path segments so requests to the same route log the same
/// pattern.
pub(super) fn route_pattern(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>();

    format!("/{}", segments.join("/"))
}
