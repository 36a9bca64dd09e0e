//! Identifier case conversion for generated client code.

/// Convert a single identifier from snake_case to camelCase.
/// e.g. "created_at" -> "createdAt", "id" -> "id"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !out.is_empty();
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_camel_case;

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("created_at"), "createdAt");
        assert_eq!(to_camel_case("deleted_at"), "deletedAt");
        assert_eq!(to_camel_case("id"), "id");
        assert_eq!(to_camel_case("per__page"), "perPage");
        assert_eq!(to_camel_case("_private"), "private");
    }
}
