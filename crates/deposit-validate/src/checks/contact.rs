//! Contact rules: email shape and phone digits.

pub fn check_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Provide a contact email.".to_string());
    }
    if !has_email_shape(trimmed) {
        return Some("The email address is not valid.".to_string());
    }
    None
}

/// Basic `local@domain.tld` shape: one `@`, no whitespace, and a dot in the
/// domain with characters on both sides.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn check_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some("Provide a contact phone number.".to_string());
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let ok = (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    if !ok {
        return Some("The phone number must contain 8-15 digits and may start with +.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{check_email, check_phone};

    #[test]
    fn email_shape() {
        assert!(check_email("anna@example.com").is_none());
        assert!(check_email("a.b@mail.example.lv").is_none());
        assert!(check_email("").is_some());
        assert!(check_email("anna").is_some());
        assert!(check_email("anna@example").is_some());
        assert!(check_email("@example.com").is_some());
        assert!(check_email("anna@.com").is_some());
        assert!(check_email("an na@example.com").is_some());
        assert!(check_email("anna@exa@mple.com").is_some());
    }

    #[test]
    fn phone_digits() {
        assert!(check_phone("+37120234158").is_none());
        assert!(check_phone("20234158").is_none());
        assert!(check_phone("").is_some());
        assert!(check_phone("1234567").is_some());
        assert!(check_phone("1234567890123456").is_some());
        assert!(check_phone("+371 2023 4158").is_some());
        assert!(check_phone("20-23-41-58").is_some());
    }
}
