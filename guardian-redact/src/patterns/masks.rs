//! Mask rules. Every function is total over any `&str`; lengths are counted
//! in chars so multi-byte input never splits a code point.

/// Fixed replacement for a national ID, regardless of input spacing.
pub const NATIONAL_ID_MASK: &str = "XXXX XXXX XXXX";

const PHONE_FILL: &str = "XXXXXX";
const PASSPORT_FILL: &str = "XXXXXXX";

fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if n >= len {
        return s;
    }
    match s.char_indices().nth(len - n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

fn fill(n: usize) -> String {
    "X".repeat(n)
}

/// `+91-9876543210` → `+9XXXXXX10`.
pub fn mask_phone(matched: &str) -> String {
    format!("{}{PHONE_FILL}{}", head(matched, 2), tail(matched, 2))
}

pub fn mask_national_id(_matched: &str) -> String {
    NATIONAL_ID_MASK.to_string()
}

/// `A1234567` → `AXXXXXXX`.
pub fn mask_passport(matched: &str) -> String {
    format!("{}{PASSPORT_FILL}", head(matched, 1))
}

/// Keeps two local-part chars and the whole domain. Shared by payment
/// handles and emails.
pub fn mask_handle(matched: &str) -> String {
    let (local, domain) = match matched.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (matched, None),
    };
    let hidden = local.chars().count().saturating_sub(2);
    let mut out = format!("{}{}", head(local, 2), fill(hidden));
    if let Some(domain) = domain {
        out.push('@');
        out.push_str(domain);
    }
    out
}

/// `192.168.1.42` → `192.168.1.x`.
pub fn mask_ipv4(matched: &str) -> String {
    match matched.rsplit_once('.') {
        Some((network, _)) => format!("{network}.x"),
        None => "x".to_string(),
    }
}

/// Keeps three chars at each end; short tokens are fully hidden.
pub fn mask_device_id(matched: &str) -> String {
    let len = matched.chars().count();
    if len <= 6 {
        return fill(len);
    }
    format!("{}{}{}", head(matched, 3), fill(len - 6), tail(matched, 3))
}
