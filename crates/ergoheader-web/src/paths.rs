//! Relative links back to the site root

/// Relative path from a page slug to the site root
///
/// Every directory segment above the page becomes `..`; pages at the root
/// resolve to `.`.
///
/// # Examples
///
/// ```
/// use ergoheader_web::path_to_root;
///
/// assert_eq!(path_to_root("index"), ".");
/// assert_eq!(path_to_root("research/kelly/index"), "../..");
/// ```
pub fn path_to_root(slug: &str) -> String {
    let parents: Vec<&str> = slug.split('/').filter(|part| !part.is_empty()).collect();
    let depth = parents.len().saturating_sub(1);

    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}
