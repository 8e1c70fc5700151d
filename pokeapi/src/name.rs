//! Conversion between user-facing and API names

use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

const MALE_SIGN: char = '\u{2642}';
const FEMALE_SIGN: char = '\u{2640}';

/// Convert user input into the name the API expects.
///
/// Nidoran's gender symbols become the `-m`/`-f` suffixes the API uses;
/// everything is lowercased.
pub fn to_api_name(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    if !lower.starts_with("nidoran") {
        return lower;
    }

    if let Some(stem) = lower.strip_suffix(MALE_SIGN) {
        format!("{}-m", stem.trim_end())
    } else if let Some(stem) = lower.strip_suffix(FEMALE_SIGN) {
        format!("{}-f", stem.trim_end())
    } else {
        lower
    }
}

/// Convert an API name into a display name: the inverse of
/// [`to_api_name`] for Nidoran, with the first letter capitalized.
pub fn to_display_name(api_name: &str) -> String {
    let name = if api_name.starts_with("nidoran") {
        if let Some(stem) = api_name.strip_suffix("-m") {
            format!("{stem}{MALE_SIGN}")
        } else if let Some(stem) = api_name.strip_suffix("-f") {
            format!("{stem}{FEMALE_SIGN}")
        } else {
            api_name.to_string()
        }
    } else {
        api_name.to_string()
    };

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A creature identifier: a name or a national dex number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Name(String),
    Id(u32),
}

impl Identifier {
    /// Parse user input; all-digit input is treated as a dex number
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidIdentifier(input.to_string()));
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed
                .parse()
                .map(Identifier::Id)
                .map_err(|_| FetchError::InvalidIdentifier(input.to_string()));
        }

        Ok(Identifier::Name(to_api_name(trimmed)))
    }

    /// Path segment used in resource URLs
    pub fn path_segment(&self) -> String {
        match self {
            Identifier::Name(name) => name.clone(),
            Identifier::Id(id) => id.to_string(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Name(name) => f.write_str(name),
            Identifier::Id(id) => write!(f, "#{id}"),
        }
    }
}

impl FromStr for Identifier {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}
