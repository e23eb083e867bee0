//! Header field labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized email header field label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldToken {
    From,
    To,
    Cc,
    Bcc,
    Subject,
    Date,
    Sent,
    Importance,
    Attachments,
}

impl FieldToken {
    /// Every recognized label, in canonical order
    pub const ALL: [Self; 9] = [
        Self::From,
        Self::To,
        Self::Cc,
        Self::Bcc,
        Self::Subject,
        Self::Date,
        Self::Sent,
        Self::Importance,
        Self::Attachments,
    ];

    /// Classify a line fragment (the text before a colon) as a field label
    #[must_use]
    pub fn from_label(fragment: &str) -> Option<Self> {
        Self::from_normalized(&normalize_label(fragment))
    }

    /// Match an already normalized label
    #[must_use]
    pub fn from_normalized(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == label)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Cc => "cc",
            Self::Bcc => "bcc",
            Self::Subject => "subject",
            Self::Date => "date",
            Self::Sent => "sent",
            Self::Importance => "importance",
            Self::Attachments => "attachments",
        }
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold a label to lowercase and drop all whitespace.
///
/// OCR frequently inserts spaces inside labels ("S u b j e c t").
#[must_use]
pub fn normalize_label(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
