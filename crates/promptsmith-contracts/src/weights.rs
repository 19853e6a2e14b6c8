//! Weighted emphasis tokens.
//!
//! Grammar:
//!
//! ```text
//! token  := [scope ":"] "<" term ":" weight ">"
//! scope  := "Subject" | "Background"      (Global is implicit)
//! term   := any text without "," "<" ">"
//! weight := one fractional digit in 0.1..=2.0
//! ```
//!
//! [`format_token`] and [`parse_token`] are inverses. [`merge_into_field`] is
//! the only path that writes tokens into a comma-separated negative prompt, so
//! re-applying the same tokens never duplicates them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_WEIGHT: f64 = 0.1;
pub const MAX_WEIGHT: f64 = 2.0;
pub const DEFAULT_NEGATIVE_WEIGHT: f64 = 1.5;

const RESERVED: [char; 3] = [',', '<', '>'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scope {
    #[default]
    Global,
    Subject,
    Background,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::Global => "Global",
            Scope::Subject => "Subject",
            Scope::Background => "Background",
        }
    }

    fn from_label(raw: &str) -> Option<Self> {
        match raw {
            "Global" => Some(Scope::Global),
            "Subject" => Some(Scope::Subject),
            "Background" => Some(Scope::Background),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
    #[serde(default, alias = "type")]
    pub polarity: Polarity,
    #[serde(default)]
    pub scope: Scope,
}

impl WeightedTerm {
    pub fn positive(term: impl Into<String>, weight: f64, scope: Scope) -> Self {
        Self {
            term: term.into(),
            weight,
            polarity: Polarity::Positive,
            scope,
        }
    }

    pub fn negative(term: impl Into<String>, weight: f64, scope: Scope) -> Self {
        Self {
            term: term.into(),
            weight,
            polarity: Polarity::Negative,
            scope,
        }
    }

    pub fn token(&self) -> Result<String, ValidationError> {
        format_token(&self.term, self.weight, self.scope)
    }
}

/// A decoded token.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedToken {
    pub term: String,
    pub weight: f64,
    pub scope: Scope,
}

pub fn validate_weight(term: &str, weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(ValidationError::WeightOutOfRange {
            term: term.to_string(),
            weight,
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

/// Rejects terms that would not survive a round trip through a
/// comma-separated field or [`parse_token`].
pub fn validate_term(term: &str) -> Result<(), ValidationError> {
    if term.trim().is_empty() {
        return Err(ValidationError::EmptyTerm);
    }
    if let Some(character) = term.chars().find(|c| RESERVED.contains(c)) {
        return Err(ValidationError::ReservedCharacter {
            term: term.to_string(),
            character,
        });
    }
    Ok(())
}

/// Renders `<term:weight>` with one fractional digit, prefixed by `Scope:`
/// unless the scope is global.
pub fn format_token(term: &str, weight: f64, scope: Scope) -> Result<String, ValidationError> {
    let term = term.trim();
    validate_term(term)?;
    validate_weight(term, weight)?;
    let body = format!("<{term}:{weight:.1}>");
    Ok(match scope {
        Scope::Global => body,
        other => format!("{}:{body}", other.label()),
    })
}

pub fn parse_token(raw: &str) -> Result<WeightedToken, ValidationError> {
    let malformed = || ValidationError::MalformedToken(raw.to_string());
    let token = raw.trim();
    let open = token.find('<').ok_or_else(malformed)?;
    let scope = match &token[..open] {
        "" => Scope::Global,
        prefix => {
            let label = prefix.strip_suffix(':').ok_or_else(malformed)?;
            match Scope::from_label(label) {
                Some(Scope::Global) | None => return Err(malformed()),
                Some(scope) => scope,
            }
        }
    };
    let inner = token[open + 1..]
        .strip_suffix('>')
        .ok_or_else(malformed)?;
    if inner.contains('<') || inner.contains('>') {
        return Err(malformed());
    }
    let (term, weight) = inner.rsplit_once(':').ok_or_else(malformed)?;
    let term = term.trim();
    validate_term(term)?;
    let weight = weight.trim();
    if !has_one_fractional_digit(weight) {
        return Err(malformed());
    }
    let weight: f64 = weight.parse().map_err(|_| malformed())?;
    validate_weight(term, weight)?;
    Ok(WeightedToken {
        term: term.to_string(),
        weight,
        scope,
    })
}

fn has_one_fractional_digit(raw: &str) -> bool {
    match raw.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && frac.len() == 1
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Splits `existing` on commas, drops blanks, appends each token not already
/// present, and rejoins with `", "`.
pub fn merge_into_field<S: AsRef<str>>(existing: &str, tokens: &[S]) -> String {
    let mut parts: Vec<String> = existing
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if !parts.iter().any(|part| part == token) {
            parts.push(token.to_string());
        }
    }
    parts.join(", ")
}

/// Formats a global exclusion token and merges it into the negative field.
pub fn add_negative_weight(field: &str, term: &str, weight: f64) -> Result<String, ValidationError> {
    let token = format_token(term, weight, Scope::Global)?;
    Ok(merge_into_field(field, &[token]))
}
