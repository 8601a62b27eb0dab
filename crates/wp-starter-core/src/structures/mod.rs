//! Built-in WordPress structures

pub mod addons;
pub mod bedrock;
pub mod classic;

pub use bedrock::BedrockStructure;
pub use classic::ClassicStructure;

use crate::registry::StructureRegistry;

/// Registry holding every built-in structure, with `classic` as the default
pub fn builtin_registry() -> StructureRegistry {
    let mut registry = StructureRegistry::new();
    registry.register_described(
        classic::KIND,
        ClassicStructure::boxed,
        "Traditional WordPress setup with a wp-content directory",
        true,
    );
    registry.register_described(
        bedrock::KIND,
        BedrockStructure::boxed,
        "Composer-managed WordPress with a separate web root",
        false,
    );
    registry
}
