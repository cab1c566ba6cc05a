//! Deserializable representation of a material catalog bundle.
//!
//! The types mirror the on-disk JSON document: a bundle carries a config
//! version and one set of catalogs, and each catalog entry is a material
//! with an id, a display name, ordered tags, and a free-form property bag.
//! Optional fields default (empty tags, null properties) so sparse
//! documents load without ceremony.

use serde::Deserialize;
use serde_json::Value;

/// One catalog entry.
///
/// `id` and `name` are required when parsing; `tags` and `properties`
/// are optional. Ids are unique by convention only, nothing enforces it.
#[derive(Clone, Debug, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Arbitrary nested JSON. Defaults to `Value::Null` when absent.
    #[serde(default)]
    pub properties: Value,
}

/// The catalog collections held by a bundle.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalogs {
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Top-level loaded document: a version tag plus one [`Catalogs`].
///
/// A bundle is loaded wholesale from a file and replaced entirely on
/// reload; it is never mutated in place at runtime.
#[derive(Clone, Debug, Deserialize)]
pub struct Bundle {
    #[serde(default = "default_config_version")]
    pub config_version: String,
    #[serde(default)]
    pub catalogs: Catalogs,
}

fn default_config_version() -> String {
    "1.0.0".to_string()
}

impl Default for Bundle {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            catalogs: Catalogs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_is_empty_with_version() {
        let bundle = Bundle::default();

        assert_eq!(bundle.config_version, "1.0.0");
        assert!(bundle.catalogs.materials.is_empty());
    }

    #[test]
    fn material_parses_with_all_fields() {
        let material: Material = serde_json::from_str(
            r#"{
                "id": "steel",
                "name": "Steel",
                "tags": ["metal", "structural"],
                "properties": { "density": 7.85 }
            }"#,
        )
        .unwrap();

        assert_eq!(material.id, "steel");
        assert_eq!(material.name, "Steel");
        assert_eq!(material.tags, vec!["metal", "structural"]);
        assert_eq!(material.properties["density"], 7.85);
    }

    #[test]
    fn material_optional_fields_default() {
        let material: Material =
            serde_json::from_str(r#"{ "id": "oak", "name": "Oak" }"#).unwrap();

        // Tags default to an empty list, properties to JSON null.
        assert!(material.tags.is_empty());
        assert!(material.properties.is_null());
    }

    #[test]
    fn material_without_id_is_an_error() {
        let result: Result<Material, _> = serde_json::from_str(r#"{ "name": "Oak" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn material_without_name_is_an_error() {
        let result: Result<Material, _> = serde_json::from_str(r#"{ "id": "oak" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn bundle_missing_sections_default() {
        let bundle: Bundle = serde_json::from_str("{}").unwrap();

        assert_eq!(bundle.config_version, "1.0.0");
        assert!(bundle.catalogs.materials.is_empty());
    }

    #[test]
    fn bundle_preserves_material_file_order() {
        let bundle: Bundle = serde_json::from_str(
            r#"{
                "config_version": "2.3.1",
                "catalogs": {
                    "materials": [
                        { "id": "c", "name": "Third" },
                        { "id": "a", "name": "First" },
                        { "id": "b", "name": "Second" }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.config_version, "2.3.1");

        // Materials stay in file order, not sorted by id.
        let ids: Vec<&str> = bundle
            .catalogs
            .materials
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn bundle_ignores_unknown_keys() {
        let bundle: Bundle = serde_json::from_str(
            r#"{
                "config_version": "1.0.0",
                "generator": "some-tool",
                "catalogs": { "materials": [], "extra": 1 }
            }"#,
        )
        .unwrap();

        assert!(bundle.catalogs.materials.is_empty());
    }
}
