//! Member-name validity and collision-free renaming.

/// `[A-Za-z_][A-Za-z0-9_]*`, the only member names the host accepts.
pub fn is_valid_member_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Append the smallest unused `_<n>` suffix (n >= 1) when `name` is taken.
///
/// `is_taken` must consult the post-deletion name set: names freed by the
/// overlap deletions are reusable, so a member may take over the name of
/// the member it overwrites without being suffixed.
pub fn disambiguate(name: &str, mut is_taken: impl FnMut(&str) -> bool) -> String {
    if !is_taken(name) {
        return name.to_string();
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{name}_{n}");
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
