/// Identifier for a material in a [`crate::bundle::Catalogs`].
///
/// This is an index into `Catalogs::materials`, and is only meaningful
/// within the lifetime of a given loaded [`crate::bundle::Bundle`].
pub type MaterialIndex = usize;
