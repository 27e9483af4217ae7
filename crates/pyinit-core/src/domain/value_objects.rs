//! Value objects: small, immutable, compared by value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// License the generated project is published under.
///
/// The display form is the SPDX identifier, which is also what ends up in
/// the rendered `LICENSE` selection and the package-manager invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
}

impl License {
    pub const ALL: [License; 3] = [License::Mit, License::Apache2, License::Gpl3];

    /// SPDX identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    /// Case-insensitive; accepts the SPDX id and a few common spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "apache-2.0" | "apache2" | "apache" => Ok(Self::Apache2),
            "gpl-3.0" | "gpl3" | "gpl" => Ok(Self::Gpl3),
            _ => Err(DomainError::UnknownLicense(s.to_string())),
        }
    }
}
