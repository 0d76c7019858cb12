use serde::{Deserialize, Serialize};
use std::fmt;

/// Регион поставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// All regions in the fixed sampling order.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    /// Код региона (совпадает с именем колонки в CSV)
    pub fn code(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    pub fn all() -> Vec<Region> {
        Self::ALL.to_vec()
    }

    /// Case-insensitive parse; surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Region::from_code("North"), Some(Region::North));
        assert_eq!(Region::from_code(" west "), Some(Region::West));
        assert_eq!(Region::from_code("EAST"), Some(Region::East));
        assert_eq!(Region::from_code("Central"), None);
        assert_eq!(Region::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_region_name() {
        let json = serde_json::to_string(&Region::South).unwrap();
        assert_eq!(json, "\"South\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::South);
    }
}
