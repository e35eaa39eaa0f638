//! Path Resolution
//!
//! Pure normalization of user-entered paths against the current working
//! directory. Paths live in the tree's dialect: `~`-relative (`~/a/b`) or
//! absolute (`/a/b`). Never fails; malformed input yields a best-effort
//! normalized string.

/// Resolve `target_path` against `current_path` into a normalized path.
///
/// Rules:
/// - a target starting with `/` is returned unchanged;
/// - the literal target `~` resolves to `~`;
/// - a target starting with `~/` is anchored at home, ignoring
///   `current_path`;
/// - otherwise the current path supplies the base segments and the target
///   segments are walked in order: `.` is a no-op, `..` pops unless it
///   would remove the `~`/root anchor, anything else is appended.
pub fn resolve_path(current_path: &str, target_path: &str) -> String {
    if target_path.starts_with('/') {
        return target_path.to_string();
    }
    if target_path == "~" {
        return "~".to_string();
    }

    let (home_anchored, base, target) = if let Some(rest) = target_path.strip_prefix("~/") {
        (true, vec!["~".to_string()], rest)
    } else if current_path.starts_with('/') {
        (false, split_segments(current_path), target_path)
    } else {
        let mut parts = split_segments(current_path);
        if parts.first().map(String::as_str) != Some("~") {
            parts.insert(0, "~".to_string());
        }
        (true, parts, target_path)
    };

    let mut parts = base;
    // The anchor segment (`~` for home-relative bases) is never popped.
    let floor = if home_anchored { 1 } else { 0 };
    for segment in target.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                if parts.len() > floor {
                    parts.pop();
                }
            }
            other => parts.push(other.to_string()),
        }
    }

    if home_anchored {
        if parts.len() <= 1 {
            "~".to_string()
        } else {
            format!("~/{}", parts[1..].join("/"))
        }
    } else if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
