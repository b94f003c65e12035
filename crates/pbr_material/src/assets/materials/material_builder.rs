//! Procedural material builder
//!
//! Builder pattern API for assembling [`Pbr`] descriptions in code, with
//! presets for the two workflows.

use crate::pbr::{NormalMapSpace, Pbr, PbrType};

/// Builder for creating material descriptions programmatically
///
/// Values are stored as given. Range checks belong to the renderer that
/// consumes the description.
///
/// # Examples
/// ```
/// use pbr_material::{MaterialBuilder, PbrType};
///
/// let hull = MaterialBuilder::new()
///     .workflow(PbrType::Metal)
///     .albedo_map("hull_albedo.png")
///     .metalness(0.9)
///     .roughness(0.3)
///     .build();
///
/// assert_eq!(hull.roughness(), 0.3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaterialBuilder {
    pbr: Pbr,
}

impl MaterialBuilder {
    /// Create a new builder with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing description
    pub fn from_pbr(pbr: Pbr) -> Self {
        Self { pbr }
    }

    /// Set the workflow type
    pub fn workflow(mut self, workflow_type: PbrType) -> Self {
        self.pbr.set_workflow_type(workflow_type);
        self
    }

    /// Set the albedo map
    pub fn albedo_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_albedo_map(map);
        self
    }

    /// Set the normal map and its space
    pub fn normal_map(mut self, map: impl Into<String>, space: NormalMapSpace) -> Self {
        self.pbr.set_normal_map(map, space);
        self
    }

    /// Set the environment map
    pub fn environment_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_environment_map(map);
        self
    }

    /// Set the ambient occlusion map
    pub fn ambient_occlusion_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_ambient_occlusion_map(map);
        self
    }

    /// Set the emissive map
    pub fn emissive_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_emissive_map(map);
        self
    }

    /// Set the light map and the texture coordinate set it samples
    pub fn light_map(mut self, map: impl Into<String>, uv_set: u32) -> Self {
        self.pbr.set_light_map(map, uv_set);
        self
    }

    /// Set the metal workflow roughness map
    pub fn roughness_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_roughness_map(map);
        self
    }

    /// Set the metal workflow metalness map
    pub fn metalness_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_metalness_map(map);
        self
    }

    /// Set the metal workflow metalness value
    pub fn metalness(mut self, value: f64) -> Self {
        self.pbr.set_metalness(value);
        self
    }

    /// Set the metal workflow roughness value
    pub fn roughness(mut self, value: f64) -> Self {
        self.pbr.set_roughness(value);
        self
    }

    /// Set the specular workflow glossiness map
    pub fn glossiness_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_glossiness_map(map);
        self
    }

    /// Set the specular workflow glossiness value
    pub fn glossiness(mut self, value: f64) -> Self {
        self.pbr.set_glossiness(value);
        self
    }

    /// Set the specular workflow specular map
    pub fn specular_map(mut self, map: impl Into<String>) -> Self {
        self.pbr.set_specular_map(map);
        self
    }

    /// Build the final description
    pub fn build(self) -> Pbr {
        self.pbr
    }

    // ===== PRESETS =====

    /// Metal/roughness material with scalar values only
    ///
    /// # Arguments
    /// * `metalness` - Metalness value
    /// * `roughness` - Roughness value
    pub fn metal(metalness: f64, roughness: f64) -> Pbr {
        Self::new()
            .workflow(PbrType::Metal)
            .metalness(metalness)
            .roughness(roughness)
            .build()
    }

    /// Specular/glossiness material driven by a specular map
    ///
    /// # Arguments
    /// * `specular_map` - Specular color texture
    /// * `glossiness` - Glossiness value
    pub fn specular(specular_map: impl Into<String>, glossiness: f64) -> Pbr {
        Self::new()
            .workflow(PbrType::Specular)
            .specular_map(specular_map)
            .glossiness(glossiness)
            .build()
    }
}

impl From<MaterialBuilder> for Pbr {
    fn from(builder: MaterialBuilder) -> Self {
        builder.build()
    }
}
