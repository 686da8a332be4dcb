pub mod masks;
pub mod pii;

use std::borrow::Cow;
use std::sync::LazyLock;

use guardian_core::models::Category;
use regex::{Captures, Regex};

/// Byte range of one match within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One category's recognizer: its pattern and its mask rule.
pub struct CategoryMatcher {
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub masker: fn(&str) -> String,
}

impl CategoryMatcher {
    /// Non-overlapping matches, left to right.
    pub fn matches(&self, text: &str) -> Vec<Span> {
        let Some(re) = self.regex.as_ref() else {
            return Vec::new();
        };
        re.find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    pub fn mask(&self, matched: &str) -> String {
        (self.masker)(matched)
    }

    /// Replace every match with its mask. Borrowed when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(re) = self.regex.as_ref() else {
            return Cow::Borrowed(text);
        };
        re.replace_all(text, |caps: &Captures<'_>| (self.masker)(&caps[0]))
    }

    /// False if the pattern failed to compile; such a matcher never matches.
    pub fn is_healthy(&self) -> bool {
        self.regex.is_some()
    }
}

/// Matchers in evaluation order: Phone → NationalId → Passport →
/// PaymentHandle → Email → Ipv4 → DeviceId.
///
/// NationalId runs before anything inserts placeholders. PaymentHandle runs
/// before Email so it claims bare `local@provider` tokens. DeviceId is the
/// broadest pattern and runs last.
static MATCHERS: [CategoryMatcher; 7] = [
    CategoryMatcher {
        category: Category::Phone,
        regex: &pii::RE_PHONE,
        masker: masks::mask_phone,
    },
    CategoryMatcher {
        category: Category::NationalId,
        regex: &pii::RE_NATIONAL_ID,
        masker: masks::mask_national_id,
    },
    CategoryMatcher {
        category: Category::Passport,
        regex: &pii::RE_PASSPORT,
        masker: masks::mask_passport,
    },
    CategoryMatcher {
        category: Category::PaymentHandle,
        regex: &pii::RE_PAYMENT_HANDLE,
        masker: masks::mask_handle,
    },
    CategoryMatcher {
        category: Category::Email,
        regex: &pii::RE_EMAIL,
        masker: masks::mask_handle,
    },
    CategoryMatcher {
        category: Category::Ipv4,
        regex: &pii::RE_IPV4,
        masker: masks::mask_ipv4,
    },
    CategoryMatcher {
        category: Category::DeviceId,
        regex: &pii::RE_DEVICE_ID,
        masker: masks::mask_device_id,
    },
];

/// The fixed, immutable matcher table.
pub fn all_matchers() -> &'static [CategoryMatcher] {
    &MATCHERS
}

/// Look up one category's matcher.
pub fn matcher_for(category: Category) -> &'static CategoryMatcher {
    // The table holds every category exactly once, in declaration order.
    &MATCHERS[category as usize]
}
