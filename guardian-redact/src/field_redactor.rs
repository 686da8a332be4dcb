use std::borrow::Cow;

use guardian_core::models::FieldRedaction;
use guardian_core::traits::IFieldRedactor;

use crate::patterns::{self, CategoryMatcher};

/// Applies every category matcher, in the fixed order, to one string value.
///
/// Each pass sees the output of the previous one. Redaction is total: any
/// input produces a result.
pub struct FieldRedactor {
    matchers: &'static [CategoryMatcher],
}

impl FieldRedactor {
    pub fn new() -> Self {
        let matchers = patterns::all_matchers();
        for matcher in matchers.iter().filter(|m| !m.is_healthy()) {
            tracing::warn!(
                category = %matcher.category,
                "pattern failed to compile; category disabled"
            );
        }
        Self { matchers }
    }
}

impl Default for FieldRedactor {
    fn default() -> Self {
        Self::new()
    }
}

impl IFieldRedactor for FieldRedactor {
    fn redact_field(&self, text: &str) -> FieldRedaction {
        let mut current = text.to_string();
        let mut hits = Vec::new();

        for matcher in self.matchers {
            let replaced = match matcher.apply(&current) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };
            if let Some(next) = replaced {
                if next != current {
                    hits.push(matcher.category);
                }
                current = next;
            }
        }

        // Judged on the final text only, not per pass.
        let matched_any = current != text;
        FieldRedaction {
            text: current,
            matched_any,
            hits,
        }
    }
}
