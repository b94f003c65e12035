//! Physically-based material description
//!
//! [`Pbr`] carries the texture references and scalar parameters of either a
//! metal/roughness or a specular/glossiness workflow. It is a passive value:
//! setters accept anything, and consumers decide what is valid.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// PBR workflow a material description feeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PbrType {
    /// No workflow selected
    #[default]
    None,
    /// Metal/roughness workflow
    Metal,
    /// Specular/glossiness workflow
    Specular,
}

/// Space the normal map is defined in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMapSpace {
    /// Tangent space
    #[default]
    Tangent,
    /// Object space
    Object,
}

/// Backing storage, owned through a single heap allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct PbrData {
    workflow_type: PbrType,
    albedo_map: String,
    normal_map: String,
    normal_map_space: NormalMapSpace,
    environment_map: String,
    ambient_occlusion_map: String,
    roughness_map: String,
    metalness_map: String,
    emissive_map: String,
    light_map: String,
    light_map_tex_coord_set: u32,
    metalness: f64,
    roughness: f64,
    glossiness_map: String,
    glossiness: f64,
    specular_map: String,
}

impl Default for PbrData {
    fn default() -> Self {
        Self {
            workflow_type: PbrType::None,
            albedo_map: String::new(),
            normal_map: String::new(),
            normal_map_space: NormalMapSpace::Tangent,
            environment_map: String::new(),
            ambient_occlusion_map: String::new(),
            roughness_map: String::new(),
            metalness_map: String::new(),
            emissive_map: String::new(),
            light_map: String::new(),
            light_map_tex_coord_set: 0,
            metalness: 0.5,
            roughness: 0.5,
            glossiness_map: String::new(),
            glossiness: 0.0,
            specular_map: String::new(),
        }
    }
}

/// Bit pattern used to compare and hash scalars.
///
/// `-0.0` folds onto `0.0` and every NaN onto one canonical NaN so that
/// equality stays reflexive and agrees with `Hash`.
fn scalar_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl PbrData {
    fn scalars(&self) -> [u64; 3] {
        [
            scalar_bits(self.metalness),
            scalar_bits(self.roughness),
            scalar_bits(self.glossiness),
        ]
    }
}

impl PartialEq for PbrData {
    fn eq(&self, other: &Self) -> bool {
        self.workflow_type == other.workflow_type
            && self.albedo_map == other.albedo_map
            && self.normal_map == other.normal_map
            && self.normal_map_space == other.normal_map_space
            && self.environment_map == other.environment_map
            && self.ambient_occlusion_map == other.ambient_occlusion_map
            && self.roughness_map == other.roughness_map
            && self.metalness_map == other.metalness_map
            && self.emissive_map == other.emissive_map
            && self.light_map == other.light_map
            && self.light_map_tex_coord_set == other.light_map_tex_coord_set
            && self.glossiness_map == other.glossiness_map
            && self.specular_map == other.specular_map
            && self.scalars() == other.scalars()
    }
}

impl Eq for PbrData {}

impl Hash for PbrData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.workflow_type.hash(state);
        self.albedo_map.hash(state);
        self.normal_map.hash(state);
        self.normal_map_space.hash(state);
        self.environment_map.hash(state);
        self.ambient_occlusion_map.hash(state);
        self.roughness_map.hash(state);
        self.metalness_map.hash(state);
        self.emissive_map.hash(state);
        self.light_map.hash(state);
        self.light_map_tex_coord_set.hash(state);
        self.glossiness_map.hash(state);
        self.specular_map.hash(state);
        self.scalars().hash(state);
    }
}

/// Physically-Based-Rendering material description.
///
/// Path fields hold texture references; an empty string means the map is not
/// set. Metal and specular fields are stored independently of
/// [`workflow_type`](Self::workflow_type), which only tells consumers which set
/// to honor.
///
/// Equality compares every field by value, and `Hash` agrees with it, so two
/// descriptions built differently but holding the same values can share one
/// derived GPU resource.
///
/// # Examples
/// ```
/// use pbr_material::{NormalMapSpace, Pbr, PbrType};
///
/// let mut pbr = Pbr::new();
/// pbr.set_workflow_type(PbrType::Metal);
/// pbr.set_albedo_map("albedo.png");
/// pbr.set_normal_map("normal.png", NormalMapSpace::Object);
/// pbr.set_roughness(0.4);
///
/// let copy = pbr.clone();
/// assert_eq!(copy, pbr);
/// assert_eq!(copy.normal_map_type(), NormalMapSpace::Object);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pbr {
    data: Box<PbrData>,
}

impl Pbr {
    /// Create a description with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Workflow type
    pub fn workflow_type(&self) -> PbrType {
        self.data.workflow_type
    }

    /// Set the PBR workflow to use
    pub fn set_workflow_type(&mut self, workflow_type: PbrType) {
        self.data.workflow_type = workflow_type;
    }

    /// Albedo map filename, or an empty string if not set
    pub fn albedo_map(&self) -> &str {
        &self.data.albedo_map
    }

    /// Set the albedo map filename
    pub fn set_albedo_map(&mut self, map: impl Into<String>) {
        self.data.albedo_map = map.into();
    }

    /// Normal map filename, or an empty string if not set
    pub fn normal_map(&self) -> &str {
        &self.data.normal_map
    }

    /// Space the normal map is defined in.
    ///
    /// Only meaningful when a normal map is set, but always has a value.
    pub fn normal_map_type(&self) -> NormalMapSpace {
        self.data.normal_map_space
    }

    /// Set the normal map filename together with the space it is defined in
    pub fn set_normal_map(&mut self, map: impl Into<String>, space: NormalMapSpace) {
        self.data.normal_map = map.into();
        self.data.normal_map_space = space;
    }

    /// Set a tangent-space normal map
    pub fn set_normal_map_tangent(&mut self, map: impl Into<String>) {
        self.set_normal_map(map, NormalMapSpace::Tangent);
    }

    /// Environment map filename, or an empty string if not set
    pub fn environment_map(&self) -> &str {
        &self.data.environment_map
    }

    /// Set the environment map filename
    pub fn set_environment_map(&mut self, map: impl Into<String>) {
        self.data.environment_map = map.into();
    }

    /// Ambient occlusion map filename, or an empty string if not set
    pub fn ambient_occlusion_map(&self) -> &str {
        &self.data.ambient_occlusion_map
    }

    /// Set the ambient occlusion map filename
    pub fn set_ambient_occlusion_map(&mut self, map: impl Into<String>) {
        self.data.ambient_occlusion_map = map.into();
    }

    /// Roughness map filename for the metal workflow
    pub fn roughness_map(&self) -> &str {
        &self.data.roughness_map
    }

    /// Set the roughness map filename for the metal workflow
    pub fn set_roughness_map(&mut self, map: impl Into<String>) {
        self.data.roughness_map = map.into();
    }

    /// Metalness map filename for the metal workflow
    pub fn metalness_map(&self) -> &str {
        &self.data.metalness_map
    }

    /// Set the metalness map filename for the metal workflow
    pub fn set_metalness_map(&mut self, map: impl Into<String>) {
        self.data.metalness_map = map.into();
    }

    /// Emissive map filename, or an empty string if not set
    pub fn emissive_map(&self) -> &str {
        &self.data.emissive_map
    }

    /// Set the emissive map filename
    pub fn set_emissive_map(&mut self, map: impl Into<String>) {
        self.data.emissive_map = map.into();
    }

    /// Light map filename, or an empty string if not set
    pub fn light_map(&self) -> &str {
        &self.data.light_map
    }

    /// Index of the texture coordinate set the light map samples.
    ///
    /// Not bounds-checked against any mesh.
    pub fn light_map_tex_coord_set(&self) -> u32 {
        self.data.light_map_tex_coord_set
    }

    /// Set the light map filename together with its texture coordinate set
    pub fn set_light_map(&mut self, map: impl Into<String>, uv_set: u32) {
        self.data.light_map = map.into();
        self.data.light_map_tex_coord_set = uv_set;
    }

    /// Set a light map sampled from the first texture coordinate set
    pub fn set_light_map_default_uv(&mut self, map: impl Into<String>) {
        self.set_light_map(map, 0);
    }

    /// Metalness value for the metal workflow
    pub fn metalness(&self) -> f64 {
        self.data.metalness
    }

    /// Set the metalness value for the metal workflow
    pub fn set_metalness(&mut self, value: f64) {
        self.data.metalness = value;
    }

    /// Roughness value for the metal workflow
    pub fn roughness(&self) -> f64 {
        self.data.roughness
    }

    /// Set the roughness value for the metal workflow
    pub fn set_roughness(&mut self, value: f64) {
        self.data.roughness = value;
    }

    /// Glossiness map filename for the specular workflow
    pub fn glossiness_map(&self) -> &str {
        &self.data.glossiness_map
    }

    /// Set the glossiness map filename for the specular workflow
    pub fn set_glossiness_map(&mut self, map: impl Into<String>) {
        self.data.glossiness_map = map.into();
    }

    /// Glossiness value for the specular workflow
    pub fn glossiness(&self) -> f64 {
        self.data.glossiness
    }

    /// Set the glossiness value for the specular workflow
    pub fn set_glossiness(&mut self, value: f64) {
        self.data.glossiness = value;
    }

    /// Specular map filename for the specular workflow
    pub fn specular_map(&self) -> &str {
        &self.data.specular_map
    }

    /// Set the specular map filename for the specular workflow
    pub fn set_specular_map(&mut self, map: impl Into<String>) {
        self.data.specular_map = map.into();
    }
}
