//! Full-name rule: at least two letter groups.

/// A well-formed name is two or more groups of letters joined by single
/// whitespace, hyphen, or apostrophe separators.
pub fn check(full_name: &str) -> Option<String> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Some("Enter your full name.".to_string());
    }
    if !has_two_letter_groups(trimmed) {
        return Some("Use at least two names (e.g. First Last).".to_string());
    }
    None
}

fn has_two_letter_groups(name: &str) -> bool {
    let mut groups = 0usize;
    for token in name.split(|c: char| c.is_whitespace() || c == '-' || c == '\'') {
        // Consecutive separators yield an empty token.
        if token.is_empty() || !token.chars().all(char::is_alphabetic) {
            return false;
        }
        groups += 1;
    }
    groups >= 2
}

#[cfg(test)]
mod tests {
    use super::check;

    #[test]
    fn accepts_multi_part_names() {
        assert!(check("Anna Kalniņa").is_none());
        assert!(check("Jean-Pierre Dupont").is_none());
        assert!(check("O'Connor Smith").is_none());
    }

    #[test]
    fn rejects_single_or_malformed_names() {
        assert!(check("").is_some());
        assert!(check("   ").is_some());
        assert!(check("Anna").is_some());
        assert!(check("Anna  Kalniņa").is_some());
        assert!(check("Anna 2Fast").is_some());
        assert!(check("Anna-").is_some());
    }
}
