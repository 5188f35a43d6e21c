/// Trims, lowercases, and uppercases the first character.
///
/// A first character whose uppercase form expands to several characters
/// (for example `ß`) is left lowercase so that normalizing twice is a no-op.
pub fn normalize_name(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return lower;
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => {
            let mut out = String::with_capacity(lower.len());
            out.push(single);
            out.push_str(chars.as_str());
            out
        }
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn normalize_name_capitalizes() {
        assert_eq!(normalize_name("  jOHN "), "John");
        assert_eq!(normalize_name("SMITH"), "Smith");
    }

    #[test]
    fn normalize_name_handles_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn normalize_name_only_touches_first_character() {
        assert_eq!(normalize_name("o'NEIL"), "O'neil");
        assert_eq!(normalize_name("mary ann"), "Mary ann");
    }

    #[test]
    fn normalize_name_handles_accents() {
        assert_eq!(normalize_name("ÉMILE"), "Émile");
    }

    #[test]
    fn normalize_name_is_stable_for_expanding_uppercase() {
        let once = normalize_name("ßtraße");
        assert_eq!(normalize_name(&once), once);
    }
}
