use serde::{Deserialize, Serialize};

pub const INDIA_COUNTRY_CODE: &str = "IN";

/// Projection of the geolocation service response. Optional upstream
/// fields are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    pub country_code: String,
    pub country_name: String,
    pub city: String,
    pub region: String,
    pub currency: String,
    pub timezone: String,
}

/// Whether the caller is in India. `Unknown` is distinct from "known elsewhere".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndiaStatus {
    Unknown,
    India,
    Elsewhere,
}

impl IndiaStatus {
    pub fn from_location(location: Option<&LocationData>) -> Self {
        match location.map(|l| l.country_code.as_str()) {
            None | Some("") => IndiaStatus::Unknown,
            Some(INDIA_COUNTRY_CODE) => IndiaStatus::India,
            Some(_) => IndiaStatus::Elsewhere,
        }
    }

    /// JSON rendering: `null`, `true` or `false`.
    pub fn as_option(self) -> Option<bool> {
        match self {
            IndiaStatus::Unknown => None,
            IndiaStatus::India => Some(true),
            IndiaStatus::Elsewhere => Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(code: &str) -> LocationData {
        LocationData {
            country_code: code.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_before_detection() {
        assert_eq!(IndiaStatus::from_location(None), IndiaStatus::Unknown);
        assert_eq!(IndiaStatus::from_location(None).as_option(), None);
    }

    #[test]
    fn test_india_and_elsewhere() {
        assert_eq!(
            IndiaStatus::from_location(Some(&location("IN"))).as_option(),
            Some(true)
        );
        assert_eq!(
            IndiaStatus::from_location(Some(&location("US"))).as_option(),
            Some(false)
        );
    }

    #[test]
    fn test_empty_country_code_is_unknown() {
        assert_eq!(
            IndiaStatus::from_location(Some(&location(""))),
            IndiaStatus::Unknown
        );
    }
}
