//! Reads the Khronos `gl.xml` registry and writes the entry point table
//! `gl4_bind` is built from.

mod error;

pub mod ctype;
pub mod emit;
pub mod registry;
pub mod select;
pub mod xml;

pub use error::{RegistryError, RegistryResult};
pub use registry::{Registry, Version};
pub use select::{Api, Profile, Selected, Selection};

#[cfg(test)]
mod tests;

/// Parses a registry document.
pub fn load(source: &str) -> RegistryResult<Registry> {
    Registry::from_element(&xml::parse_document(source)?)
}
