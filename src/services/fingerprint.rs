use sha2::{Digest, Sha256};

/// Stable identity of a message: sha256 over (locale, domain, context, original).
///
/// Every field is length-prefixed and the context carries a presence tag, so
/// no two distinct tuples share an encoding (`None` and `Some("")` differ).
pub fn key(locale: &str, domain: &str, context: Option<&str>, original: &str) -> String {
    let mut hasher = Sha256::new();

    feed(&mut hasher, locale);
    feed(&mut hasher, domain);
    match context {
        Some(ctx) => {
            hasher.update([1u8]);
            feed(&mut hasher, ctx);
        }
        None => hasher.update([0u8]),
    }
    feed(&mut hasher, original);

    hex::encode(hasher.finalize())
}

fn feed(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_tuple_same_key() {
        let a = key("lt", "core", Some("menu"), "File");
        let b = key("lt", "core", Some("menu"), "File");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn any_field_change_changes_key() {
        let base = key("lt", "core", Some("menu"), "File");

        assert_ne!(base, key("lv", "core", Some("menu"), "File"));
        assert_ne!(base, key("lt", "admin", Some("menu"), "File"));
        assert_ne!(base, key("lt", "core", Some("toolbar"), "File"));
        assert_ne!(base, key("lt", "core", None, "File"));
        assert_ne!(base, key("lt", "core", Some("menu"), "Files"));
    }

    #[test]
    fn field_boundaries_are_not_ambiguous() {
        assert_ne!(key("lt", "core", None, "x"), key("ltc", "ore", None, "x"));
        assert_ne!(key("lt", "core", Some(""), "x"), key("lt", "core", None, "x"));
        assert_ne!(key("lt", "core", Some("a"), "b"), key("lt", "core", Some("ab"), ""));
    }
}
