//! Navigation path comparison.
//!
//! Routes and navigation locations are compared after stripping any query
//! string or fragment and any trailing slashes. A route matches a location
//! when they are equal or when the location lies beneath the route on a
//! path-segment boundary.

/// Normalize a navigation path for comparison.
///
/// - Everything from the first `?` or `#` onward is removed.
/// - A path made only of `/` characters collapses to `/`.
/// - Otherwise trailing slashes are removed.
///
/// # Examples
///
/// ```
/// use menutree::route::matching::normalize_path;
///
/// assert_eq!(normalize_path("/users/?page=2"), "/users");
/// assert_eq!(normalize_path("/users#top"), "/users");
/// assert_eq!(normalize_path("///"), "/");
/// assert_eq!(normalize_path("/a/b//"), "/a/b");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    if !path.is_empty() && path.bytes().all(|b| b == b'/') {
        return "/";
    }
    path.trim_end_matches('/')
}

/// Check whether a node route matches the current navigation path.
///
/// The match is either exact (after normalization) or a prefix match that
/// ends on a segment boundary: `/users` matches `/users/42` but not
/// `/users2`.
///
/// # Examples
///
/// ```
/// use menutree::route::matching::is_route_match;
///
/// assert!(is_route_match("/users", "/users"));
/// assert!(is_route_match("/users", "/users/42?tab=roles"));
/// assert!(!is_route_match("/users", "/users2"));
/// assert!(!is_route_match("/users/42", "/users"));
/// ```
#[must_use]
pub fn is_route_match(node_route: &str, current_path: &str) -> bool {
    let route = normalize_path(node_route);
    let current = normalize_path(current_path);

    if route == current {
        return true;
    }

    current
        .strip_prefix(route)
        .is_some_and(|rest| rest.starts_with('/'))
}
