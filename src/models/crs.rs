use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConversionError, Result};

const WKT_KEYWORDS: &[&str] = &[
    "PROJCRS", "GEOGCRS", "GEODCRS", "COMPOUNDCRS", "BOUNDCRS", "PROJCS", "GEOGCS", "GEOCCS",
    "COMPD_CS",
];

/// Opaque coordinate reference system identifier.
///
/// The crate never interprets the definition itself; it is handed to the
/// transformation engine, which decides whether it can be resolved. Only
/// empty identifiers are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CrsRepr", into = "String")]
pub enum CrsId {
    Epsg(u32),
    Proj4(String),
    Wkt(String),
    /// Any other authority code or name (`ESRI:102100`, `OGC:CRS84`,
    /// `urn:ogc:def:crs:EPSG::4326`), forwarded to the engine verbatim.
    Definition(String),
}

/// Settings files may carry a bare integer or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum CrsRepr {
    Code(u32),
    Text(String),
}

impl CrsId {
    pub fn wgs84() -> Self {
        CrsId::Epsg(4326)
    }

    pub fn web_mercator() -> Self {
        CrsId::Epsg(3857)
    }

    pub fn epsg(&self) -> Option<u32> {
        match self {
            CrsId::Epsg(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<u32> for CrsId {
    fn from(code: u32) -> Self {
        CrsId::Epsg(code)
    }
}

impl FromStr for CrsId {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ConversionError::UnknownCrs("empty identifier".to_string()));
        }

        let code = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("EPSG:") => &trimmed[5..],
            _ => trimmed,
        };
        if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(code) = code.parse::<u32>() {
                return Ok(CrsId::Epsg(code));
            }
        }

        if trimmed.starts_with('+') {
            return Ok(CrsId::Proj4(trimmed.to_string()));
        }

        let upper = trimmed.to_ascii_uppercase();
        if WKT_KEYWORDS
            .iter()
            .any(|keyword| upper.starts_with(keyword))
        {
            return Ok(CrsId::Wkt(trimmed.to_string()));
        }

        Ok(CrsId::Definition(trimmed.to_string()))
    }
}

impl TryFrom<&str> for CrsId {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for CrsId {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<CrsRepr> for CrsId {
    type Error = ConversionError;

    fn try_from(value: CrsRepr) -> Result<Self> {
        match value {
            CrsRepr::Code(code) => Ok(CrsId::Epsg(code)),
            CrsRepr::Text(text) => text.parse(),
        }
    }
}

impl From<CrsId> for String {
    fn from(crs: CrsId) -> Self {
        crs.to_string()
    }
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsId::Epsg(code) => write!(f, "EPSG:{}", code),
            CrsId::Proj4(definition) | CrsId::Wkt(definition) | CrsId::Definition(definition) => {
                write!(f, "{}", definition)
            }
        }
    }
}
