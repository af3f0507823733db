//! Breadcrumb trail for the current cursor

use serde::Serialize;

use crate::core::DirectoryCursor;

/// Default label shown for the media root crumb
pub const DEFAULT_HOME_LABEL: &str = "Home";

/// One navigable segment of the current path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    /// Segment name (the home label for the first crumb)
    pub label: String,
    /// Cursor to move to when this crumb is chosen
    pub navigate_to: DirectoryCursor,
}

/// Build breadcrumbs with the default home label
pub fn breadcrumbs(cursor: &DirectoryCursor) -> Vec<Breadcrumb> {
    breadcrumbs_with_home(cursor, DEFAULT_HOME_LABEL)
}

/// Build breadcrumbs, rendering the first segment with `home_label`
pub fn breadcrumbs_with_home(cursor: &DirectoryCursor, home_label: &str) -> Vec<Breadcrumb> {
    let raw = cursor.as_str();
    let mut segments: Vec<&str> = raw.split('/').collect();
    // Terminal slash leaves one empty segment behind
    if segments.last() == Some(&"") {
        segments.pop();
    }

    (1..=segments.len())
        .map(|k| {
            let label = if k == 1 {
                home_label.to_string()
            } else {
                segments[k - 1].to_string()
            };
            Breadcrumb {
                label,
                navigate_to: DirectoryCursor::new(segments[..k].join("/")),
            }
        })
        .collect()
}

/// Build breadcrumbs below a media root
///
/// The whole root, however many segments it has, is a single crumb labeled
/// `home_label`; each segment below it gets its own crumb. A cursor outside
/// the root falls back to [`breadcrumbs_with_home`].
pub fn breadcrumbs_under_root(
    cursor: &DirectoryCursor,
    root: &DirectoryCursor,
    home_label: &str,
) -> Vec<Breadcrumb> {
    let Some(rest) = cursor.as_str().strip_prefix(root.as_str()) else {
        return breadcrumbs_with_home(cursor, home_label);
    };

    let mut crumbs = vec![Breadcrumb {
        label: home_label.to_string(),
        navigate_to: root.clone(),
    }];
    let mut target = root.clone();
    for segment in rest.split('/').filter(|s| !s.is_empty()) {
        target = target.enter(segment);
        crumbs.push(Breadcrumb {
            label: segment.to_string(),
            navigate_to: target.clone(),
        });
    }
    crumbs
}
