//! Categorical fields. Each enum is the complete option set its selector
//! offers; anything else is rejected at construction.

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// A categorical record field with a closed, ordered option set.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Record field this choice fills.
    const FIELD: &'static str;
    /// Every option, in display order. The first one is the default.
    const ALL: &'static [Self];
    /// Labels shown in the selector and submitted by the form, parallel to `ALL`.
    const LABELS: &'static [&'static str];

    /// Zero-based position in [`Self::ALL`], used as the ordinal encoding.
    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    /// Parse a submitted label. Matching is exact.
    fn from_label(value: &str) -> Result<Self, FieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == value)
            .ok_or_else(|| FieldError::UnknownOption {
                field: Self::FIELD,
                value: value.to_string(),
                allowed: Self::LABELS.join(", "),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DominantCategory {
    #[default]
    Electronics,
    Fashion,
    Grocery,
    Home,
    Other,
}

impl Choice for DominantCategory {
    const FIELD: &'static str = "dominant_category";
    const ALL: &'static [Self] = &[
        Self::Electronics,
        Self::Fashion,
        Self::Grocery,
        Self::Home,
        Self::Other,
    ];
    const LABELS: &'static [&'static str] = &["Electronics", "Fashion", "Grocery", "Home", "Other"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CustomerSegment {
    #[default]
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    Occasional,
}

impl Choice for CustomerSegment {
    const FIELD: &'static str = "segment_id";
    const ALL: &'static [Self] = &[Self::Vip, Self::Regular, Self::Occasional];
    const LABELS: &'static [&'static str] = &["VIP", "Regular", "Occasional"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoyaltyStatus {
    #[default]
    Gold,
    Silver,
    Bronze,
    /// Not enrolled in the loyalty programme.
    #[serde(rename = "None")]
    Unenrolled,
}

impl Choice for LoyaltyStatus {
    const FIELD: &'static str = "loyalty_status";
    const ALL: &'static [Self] = &[Self::Gold, Self::Silver, Self::Bronze, Self::Unenrolled];
    const LABELS: &'static [&'static str] = &["Gold", "Silver", "Bronze", "None"];
}

/// Cold-start flag. Submitted and serialized as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColdStart {
    #[default]
    No,
    Yes,
}

impl Choice for ColdStart {
    const FIELD: &'static str = "is_cold_start";
    const ALL: &'static [Self] = &[Self::No, Self::Yes];
    const LABELS: &'static [&'static str] = &["0", "1"];
}

impl TryFrom<u8> for ColdStart {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::No),
            1 => Ok(Self::Yes),
            other => Self::from_label(&other.to_string()),
        }
    }
}

impl From<ColdStart> for u8 {
    fn from(value: ColdStart) -> Self {
        match value {
            ColdStart::No => 0,
            ColdStart::Yes => 1,
        }
    }
}
