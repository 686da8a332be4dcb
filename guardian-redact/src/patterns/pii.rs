use regex::Regex;
use std::sync::LazyLock;

// Case-insensitive classes also list `İ` (U+0130) and `ı` (U+0131): they
// only fold to `i`/`I` under full case folding, which `(?i)` does not apply.

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Phone (optional +91 prefix, 10-digit mobile starting 6-9) ──────────────
pii_pattern!(RE_PHONE, r"(\+91[-\s]?)?[6-9]\d{9}");

// ── National ID (three groups of four digits) ──────────────────────────────
pii_pattern!(RE_NATIONAL_ID, r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}\b");

// ── Passport (one letter, seven digits) ────────────────────────────────────
pii_pattern!(RE_PASSPORT, r"(?i)\b[A-Zİı][0-9]{7}\b");

// ── Payment handle (local@provider, no TLD) ────────────────────────────────
pii_pattern!(RE_PAYMENT_HANDLE, r"(?i)\b[\w.\-+]{2,}@[a-zA-Zİı]{2,}\b");

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"(?i)[A-Za-z0-9._%+\-İı]+@[A-Za-z0-9.\-İı]+\.[A-Za-zİı]{2,}"
);

// ── IPv4 ───────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:25[0-5]|2[0-4]\d|1?\d?\d)(?:\.(?:25[0-5]|2[0-4]\d|1?\d?\d)){3}\b"
);

// ── Device ID (long hex token, or UUID-like alphanumeric/hyphen token) ─────
pii_pattern!(
    RE_DEVICE_ID,
    r"\b[a-fA-F0-9]{16,64}\b|\b[A-Za-z0-9\-]{20,64}\b"
);
