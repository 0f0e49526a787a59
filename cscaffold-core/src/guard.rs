/// Derive the header-guard token for a project name: the uppercase
/// transliteration of the name exactly as supplied.
///
/// No sanitization is performed. Hyphens, spaces, or leading digits pass
/// through unchanged; supplying a preprocessor-safe name is the caller's
/// responsibility.
pub fn guard_token(name: &str) -> String {
    name.to_uppercase()
}
