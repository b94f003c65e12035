//! # PBR Material
//!
//! Renderer-agnostic description of Physically-Based-Rendering material
//! workflows.
//!
//! ## Features
//!
//! - **Material Description**: [`Pbr`] holds the texture references and scalar
//!   parameters of a metal/roughness or specular/glossiness workflow
//! - **Value Semantics**: clone, move, equality and hashing by field value
//! - **MTL Import**: Wavefront MTL files with PBR extensions
//! - **Resource Caching**: share one derived resource between equal descriptions
//! - **Material Libraries**: persist named descriptions as TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use pbr_material::prelude::*;
//!
//! let mut a = Pbr::new();
//! a.set_workflow_type(PbrType::Metal);
//! a.set_albedo_map("albedo.png");
//! a.set_roughness(0.4);
//!
//! let b = MaterialBuilder::new()
//!     .roughness(0.4)
//!     .albedo_map("albedo.png")
//!     .workflow(PbrType::Metal)
//!     .build();
//!
//! assert_eq!(a, b);
//!
//! let cache: MaterialCache<u32> = MaterialCache::new();
//! let first = cache.get_or_insert_with(&a, |_| 1);
//! let second = cache.get_or_insert_with(&b, |_| 2);
//! assert_eq!(*first, *second);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod error;
pub mod logging;
pub mod pbr;

pub use assets::materials::{MaterialBuilder, MaterialCache, MaterialLoader, MtlParser};
pub use config::{Config, MaterialLibrary};
pub use error::{MaterialError, MaterialResult};
pub use pbr::{NormalMapSpace, Pbr, PbrType};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        Config, MaterialBuilder, MaterialCache, MaterialError, MaterialLibrary, MaterialLoader,
        MaterialResult, MtlParser, NormalMapSpace, Pbr, PbrType,
    };
}
