use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// JIS X 0401 prefecture code, 1 (Hokkaido) through 47 (Okinawa).
/// JARTIC traffic data is partitioned by this code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrefectureCode(u8);

impl PrefectureCode {
    const ISO_PREFIX: &'static str = "JP-";
    const MAX: u8 = 47;

    pub fn new(code: u8) -> Result<PrefectureCode, String> {
        if code == 0 || code > Self::MAX {
            Err(format!(
                "prefecture code must be in range [1,{}], found {code}",
                Self::MAX
            ))
        } else {
            Ok(PrefectureCode(code))
        }
    }

    /// reads an ISO 3166-2 subdivision code such as `JP-21`.
    pub fn from_iso3166(iso: &str) -> Result<PrefectureCode, String> {
        match iso.trim().strip_prefix(Self::ISO_PREFIX) {
            Some(code) => code.parse(),
            None => Err(format!("'{iso}' is not a Japanese ISO 3166-2 code")),
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Display for PrefectureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for PrefectureCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with(Self::ISO_PREFIX) {
            return PrefectureCode::from_iso3166(trimmed);
        }
        let code = trimmed
            .parse::<u8>()
            .map_err(|_| format!("invalid prefecture code: '{s}'"))?;
        PrefectureCode::new(code)
    }
}

impl TryFrom<String> for PrefectureCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PrefectureCode::from_str(&value)
    }
}

impl From<PrefectureCode> for String {
    fn from(value: PrefectureCode) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::PrefectureCode;

    #[test]
    fn test_from_iso3166() {
        let code = PrefectureCode::from_iso3166("JP-21").expect("valid code");
        assert_eq!(code.as_u8(), 21);
        assert_eq!(code.to_string(), "21");
    }

    #[test]
    fn test_zero_padded_display() {
        let code: PrefectureCode = "JP-01".parse().expect("valid code");
        assert_eq!(code.to_string(), "01");
        let code: PrefectureCode = "9".parse().expect("valid code");
        assert_eq!(code.to_string(), "09");
    }

    #[test]
    fn test_rejects_foreign_and_out_of_range() {
        assert!(PrefectureCode::from_iso3166("US-CO").is_err());
        assert!(PrefectureCode::from_iso3166("JP-48").is_err());
        assert!("0".parse::<PrefectureCode>().is_err());
        assert!("JP-ab".parse::<PrefectureCode>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let mut codes = vec![
            PrefectureCode::new(23).unwrap(),
            PrefectureCode::new(2).unwrap(),
            PrefectureCode::new(21).unwrap(),
        ];
        codes.sort();
        let strs = codes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(strs, vec!["02", "21", "23"]);
    }

    #[test]
    fn test_serde_as_string() {
        let code = PrefectureCode::new(13).unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"13\"");
        let back: PrefectureCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
