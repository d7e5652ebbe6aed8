//! Payout-account rule: IBAN structure and ISO 7064 mod-97 checksum.

/// Strip whitespace and uppercase, the canonical comparison form.
pub fn sanitize(account: &str) -> String {
    account
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Render in groups of four for display, e.g. `LV80 BANK 0000 4351 9500 1`.
pub fn format_grouped(account: &str) -> String {
    let sanitized = sanitize(account);
    let mut out = String::with_capacity(sanitized.len() + sanitized.len() / 4);
    for (i, c) in sanitized.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn check(account: &str) -> Option<String> {
    if account.trim().is_empty() {
        return Some("Provide a payout account (IBAN).".to_string());
    }
    if !is_valid(account) {
        return Some("The IBAN is not valid (e.g. LV80 BANK 0000 4351 9500 1).".to_string());
    }
    None
}

/// Structural shape plus checksum. The structural form is the Latvian
/// 21-character layout: country (2 letters), check digits (2), then 17
/// alphanumerics.
pub fn is_valid(account: &str) -> bool {
    let normalized = sanitize(account);
    has_structure(&normalized) && mod97(&normalized) == Some(1)
}

fn has_structure(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    bytes.len() == 21
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

/// ISO 7064: move the first four characters to the end, expand letters to
/// two-digit numerals (A=10..Z=35), and reduce the digit string mod 97.
fn mod97(iban: &str) -> Option<u32> {
    if iban.len() < 4 {
        return None;
    }
    let rearranged = iban
        .bytes()
        .cycle()
        .skip(4)
        .take(iban.len());
    let mut remainder: u32 = 0;
    for byte in rearranged {
        match byte {
            b'0'..=b'9' => {
                remainder = (remainder * 10 + u32::from(byte - b'0')) % 97;
            }
            b'A'..=b'Z' => {
                let value = u32::from(byte - b'A') + 10;
                remainder = (remainder * 100 + value) % 97;
            }
            _ => return None,
        }
    }
    Some(remainder)
}

#[cfg(test)]
mod tests {
    use super::{check, format_grouped, is_valid, sanitize};

    // Published example IBAN for Latvia.
    const GOOD: &str = "LV80BANK0000435195001";

    #[test]
    fn known_good_iban_passes() {
        assert!(is_valid(GOOD));
        assert!(check(GOOD).is_none());
        assert!(check("lv80 bank 0000 4351 9500 1").is_none());
    }

    #[test]
    fn empty_and_structurally_broken_accounts_fail() {
        assert!(check("").is_some());
        assert!(check("LV80BANK00004351950").is_some());
        assert!(check("LV80BANK0000435195001XX").is_some());
        assert!(check("L180BANK0000435195001").is_some());
        assert!(check("LVXXBANK0000435195001").is_some());
    }

    #[test]
    fn checksum_mismatch_fails() {
        assert!(!is_valid("LV81BANK0000435195001"));
        assert!(!is_valid("LV80BANK0000435195002"));
    }

    #[test]
    fn grouping_and_sanitizing() {
        assert_eq!(sanitize(" lv80 bank "), "LV80BANK");
        assert_eq!(format_grouped(GOOD), "LV80 BANK 0000 4351 9500 1");
    }
}
