use std::fmt;

/// An email address that passed `validators::validate_email`.
///
/// The original casing is kept; `normalized` gives the case-folded form used
/// for uniqueness. Folding is ASCII-only, matching `lower(email COLLATE "C")`
/// in the unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub(crate) fn from_validated(raw: impl Into<String>) -> Self {
        Email(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
