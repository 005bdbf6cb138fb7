use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// Built-in bump file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    PlainText,
    Gradle,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::PlainText, Format::Gradle, Format::Yaml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::PlainText => "plain-text",
            Format::Gradle => "gradle",
            Format::Yaml => "yaml",
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FormatError::unknown_format(s))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
