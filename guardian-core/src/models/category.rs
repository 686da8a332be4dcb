use std::fmt;

use serde::{Deserialize, Serialize};

/// A class of PII with its own detection pattern and mask rule.
///
/// Variant order is the evaluation order; see [`Category::ORDERED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phone,
    NationalId,
    Passport,
    PaymentHandle,
    Email,
    Ipv4,
    DeviceId,
}

impl Category {
    /// All categories in the fixed per-field evaluation order.
    pub const ORDERED: [Category; 7] = [
        Category::Phone,
        Category::NationalId,
        Category::Passport,
        Category::PaymentHandle,
        Category::Email,
        Category::Ipv4,
        Category::DeviceId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "national_id",
            Self::Passport => "passport",
            Self::PaymentHandle => "payment_handle",
            Self::Email => "email",
            Self::Ipv4 => "ipv4",
            Self::DeviceId => "device_id",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
