//! Slug naming rules for JSON keys

/// Key names accepted even though they do not match the slug pattern.
///
/// Language codes (`chi_sim`, `chi_tra`) and sprite sheet metadata.
pub const ALLOWED_EXCEPTIONS: &[&str] = &[
    "chi_sim",
    "chi_tra",
    "spriteHeight",
    "spriteWidth",
    "spriteLocations",
];

/// Return true if `name` is an allowed exception or a slug.
pub fn is_valid_name(name: &str) -> bool {
    is_allowed_exception(name) || is_slug(name)
}

/// Return true if `name` is in the compiled-in allow-list (case-sensitive)
pub fn is_allowed_exception(name: &str) -> bool {
    ALLOWED_EXCEPTIONS.contains(&name)
}

/// Return true if `name` is non-empty and made only of `[a-z0-9-]`
pub fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
