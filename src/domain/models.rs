//! Core data structures for the location picker.
//!
//! This module contains the geographic lookup records returned by the
//! IBGE localities service and the selection state that the picker
//! screen accumulates before navigating to the points screen.

use serde::Deserialize;

/// Reserved value denoting "no selection made" in either picker field.
///
/// The lookup service never produces this value for a UF code or a city
/// name, so it can safely double as the placeholder entry in both lists.
pub const UNSELECTED: &str = "0";

/// A top-level administrative region (UF, state-equivalent).
///
/// Deserialized directly from the lookup service payload, which uses
/// Portuguese field names. The picker displays the two-letter code,
/// matching the service's own convention for state selection.
///
/// # Examples
///
/// ```
/// use recicla::domain::Region;
///
/// let region: Region = serde_json::from_str(r#"{"sigla":"SP","nome":"São Paulo"}"#).unwrap();
/// assert_eq!(region.code, "SP");
/// assert_eq!(region.name, "São Paulo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    /// Two-letter UF code (e.g. "SP"), used as the route parameter
    #[serde(rename = "sigla")]
    pub code: String,
    /// Full region name (e.g. "São Paulo")
    #[serde(rename = "nome")]
    pub name: String,
}

/// A city-equivalent division scoped to a region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Locality {
    /// Numeric municipality identifier assigned by the lookup service
    pub id: u64,
    /// Display name, also the value forwarded to the points screen
    #[serde(rename = "nome")]
    pub name: String,
}

/// The pair of raw string values the picker forwards as route parameters.
///
/// Either field may hold the [`UNSELECTED`] sentinel; a navigation is only
/// meaningful once both are real values.
///
/// # Examples
///
/// ```
/// use recicla::domain::Selection;
///
/// let mut selection = Selection::default();
/// assert!(!selection.is_complete());
///
/// selection.uf = "SP".to_string();
/// selection.city = "Santos".to_string();
/// assert!(selection.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected UF code, or the sentinel
    pub uf: String,
    /// Selected city name, or the sentinel
    pub city: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            uf: UNSELECTED.to_string(),
            city: UNSELECTED.to_string(),
        }
    }
}

impl Selection {
    /// Returns true when the UF field holds a real value.
    pub fn has_uf(&self) -> bool {
        self.uf != UNSELECTED
    }

    /// Returns true when the city field holds a real value.
    pub fn has_city(&self) -> bool {
        self.city != UNSELECTED
    }

    /// Returns true when both fields hold real values and the selection
    /// can be forwarded to the points screen.
    pub fn is_complete(&self) -> bool {
        self.has_uf() && self.has_city()
    }

    /// Resets the city field to the sentinel.
    ///
    /// Called whenever the UF changes, since a city only makes sense
    /// within the region it was fetched for.
    pub fn clear_city(&mut self) {
        self.city = UNSELECTED.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_default_is_unselected() {
        let selection = Selection::default();
        assert_eq!(selection.uf, UNSELECTED);
        assert_eq!(selection.city, UNSELECTED);
        assert!(!selection.has_uf());
        assert!(!selection.has_city());
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_selection_complete_requires_both_fields() {
        let mut selection = Selection::default();
        selection.uf = "RJ".to_string();
        assert!(selection.has_uf());
        assert!(!selection.is_complete());

        selection.city = "Niterói".to_string();
        assert!(selection.is_complete());
    }

    #[test]
    fn test_clear_city_keeps_uf() {
        let mut selection = Selection {
            uf: "MG".to_string(),
            city: "Uberlândia".to_string(),
        };

        selection.clear_city();

        assert_eq!(selection.uf, "MG");
        assert_eq!(selection.city, UNSELECTED);
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_region_deserializes_service_field_names() {
        let json = r#"[{"id":35,"sigla":"SP","nome":"São Paulo"},{"id":33,"sigla":"RJ","nome":"Rio de Janeiro"}]"#;
        let regions: Vec<Region> = serde_json::from_str(json).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].code, "SP");
        assert_eq!(regions[1].name, "Rio de Janeiro");
    }

    #[test]
    fn test_locality_deserializes_service_field_names() {
        let json = r#"{"id":3550308,"nome":"São Paulo"}"#;
        let locality: Locality = serde_json::from_str(json).unwrap();

        assert_eq!(locality.id, 3550308);
        assert_eq!(locality.name, "São Paulo");
    }
}
