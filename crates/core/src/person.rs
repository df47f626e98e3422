// SPDX-License-Identifier: MIT

//!
//! Person identity and contact details
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Markup the spreadsheet export wraps around e-mail addresses
const EMAIL_MARKUP_ARTEFACTS: [&str; 2] = ["<html><u>", "</u></html>"];

/// Errors that can arise in relation to a [`PersonId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonIdError {
    #[error("Person identity cannot be empty")]
    Empty,
}

/// The identity key of a person (their cleaned e-mail address).  Two
/// assignments with the same [`PersonId`] are drawn on the same row.
#[rustfmt::skip]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create an identity from a raw e-mail cell, removing any markup wrapper
    /// and surrounding whitespace
    pub fn from<S: ToString>(raw: S) -> Result<Self, PersonIdError> {
        let mut cleaned = raw.to_string();
        for artefact in EMAIL_MARKUP_ARTEFACTS {
            cleaned = cleaned.replace(artefact, "");
        }
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            Err(PersonIdError::Empty)
        } else {
            Ok(PersonId(cleaned.to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        PersonId::from(string).map_err(serde::de::Error::custom)
    }
}

/// Remove all whitespace from a phone number.  An absent number is the empty
/// string.
pub fn normalise_phone(phone: Option<&str>) -> String {
    phone
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_strips_markup() {
        let id = PersonId::from("<html><u>ada@example.org</u></html>").unwrap();
        assert_eq!(id.as_str(), "ada@example.org");
        assert_eq!(id, PersonId::from(" ada@example.org ").unwrap());
    }

    #[test]
    fn from_rejects_empty() {
        assert!(PersonId::from("").is_err());
        assert!(PersonId::from("<html><u></u></html>").is_err());
    }

    #[test]
    fn deserialise() {
        let id: PersonId = serde_json::from_str(r#""<html><u>a@b.c</u></html>""#).unwrap();
        assert_eq!(id.as_str(), "a@b.c");
        assert!(serde_json::from_str::<PersonId>(r#""  ""#).is_err());
    }

    #[test]
    fn phone() {
        assert_eq!(normalise_phone(Some("06 12 34 56 78")), "0612345678");
        assert_eq!(normalise_phone(None), "");
        assert_eq!(normalise_phone(Some("   ")), "");
    }
}
