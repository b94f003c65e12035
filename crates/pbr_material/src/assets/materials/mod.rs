//! Material import and caching subsystem
//!
//! File-based (MTL) and procedural (builder) creation of material
//! descriptions, plus a cache that shares derived resources between equal
//! descriptions.

pub mod mtl_parser;
pub mod material_loader;
pub mod material_builder;
pub mod material_cache;

pub use mtl_parser::MtlParser;
pub use material_loader::MaterialLoader;
pub use material_builder::MaterialBuilder;
pub use material_cache::MaterialCache;
