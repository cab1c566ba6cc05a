//! Case-insensitive substring search over materials.
//!
//! A material is shown when the filter text appears in its id, its name,
//! or any of its tags. An empty filter matches everything.

use crate::bundle::Material;
use crate::types::MaterialIndex;

/// Returns `true` when `needle` occurs in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `true` when the material matches the filter text.
///
/// The filter hits on the id, the name, or any tag; an empty filter
/// matches every material.
pub fn matches_filter(material: &Material, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    contains_ignore_case(&material.id, filter)
        || contains_ignore_case(&material.name, filter)
        || material
            .tags
            .iter()
            .any(|tag| contains_ignore_case(tag, filter))
}

/// Returns the indices of all materials matching the filter, in catalog order.
pub fn filtered_indices(materials: &[Material], filter: &str) -> Vec<MaterialIndex> {
    materials
        .iter()
        .enumerate()
        .filter_map(|(i, m)| matches_filter(m, filter).then_some(i))
        .collect()
}
