//! Material loader with MTL file support
//!
//! Loads material descriptions from MTL files and resolves their texture
//! references against the directory of the MTL file. Textures are only
//! referenced, never opened.

use std::fs;
use std::path::{Path, PathBuf};

use super::mtl_parser::MtlParser;
use crate::error::{MaterialError, MaterialResult};
use crate::pbr::Pbr;

/// Material loader for creating [`Pbr`] descriptions from MTL files
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load material from MTL file
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file
    /// * `material_name` - Name of the specific material to load (matches newmtl name)
    ///
    /// # Returns
    /// The material description with texture paths resolved relative to the MTL file
    pub fn load_mtl(mtl_path: impl AsRef<Path>, material_name: &str) -> MaterialResult<Pbr> {
        let mtl_path = mtl_path.as_ref();
        let mut materials = Self::read_and_parse(mtl_path)?;

        let mut pbr = materials.remove(material_name).ok_or_else(|| MaterialError::NotFound {
            name: material_name.to_string(),
            path: mtl_path.to_path_buf(),
        })?;

        Self::resolve_texture_paths(&mut pbr, &Self::get_mtl_directory(mtl_path));
        log::debug!("Loaded material '{}' from {:?}", material_name, mtl_path);

        Ok(pbr)
    }

    /// Load all materials from an MTL file
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file
    ///
    /// # Returns
    /// A vector of (material_name, description) tuples sorted by name
    pub fn load_all_mtl(mtl_path: impl AsRef<Path>) -> MaterialResult<Vec<(String, Pbr)>> {
        let mtl_path = mtl_path.as_ref();
        let materials = Self::read_and_parse(mtl_path)?;
        let mtl_dir = Self::get_mtl_directory(mtl_path);

        let mut result: Vec<(String, Pbr)> = materials
            .into_iter()
            .map(|(name, mut pbr)| {
                Self::resolve_texture_paths(&mut pbr, &mtl_dir);
                (name, pbr)
            })
            .collect();
        result.sort_by(|(a, _), (b, _)| a.cmp(b));

        log::debug!("Loaded {} materials from {:?}", result.len(), mtl_path);
        Ok(result)
    }

    /// Get the directory containing the MTL file (for resolving relative texture paths)
    pub fn get_mtl_directory(mtl_path: &Path) -> PathBuf {
        mtl_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    /// Resolve a texture path relative to a base directory
    ///
    /// Texture paths in MTL files can be:
    /// - Relative to the MTL file directory
    /// - Absolute paths
    pub fn resolve_texture_path(base_dir: &Path, texture_path: &str) -> PathBuf {
        let texture_path = Path::new(texture_path);

        if texture_path.is_absolute() {
            return texture_path.to_path_buf();
        }

        base_dir.join(texture_path)
    }

    fn read_and_parse(mtl_path: &Path) -> MaterialResult<std::collections::HashMap<String, Pbr>> {
        let contents = fs::read_to_string(mtl_path)?;
        MtlParser::parse(&contents)
    }

    /// Rewrite every set texture reference; unset ones stay empty
    fn resolve_texture_paths(pbr: &mut Pbr, base_dir: &Path) {
        let resolve = |path: &str| -> String {
            if path.is_empty() {
                String::new()
            } else {
                Self::resolve_texture_path(base_dir, path)
                    .to_string_lossy()
                    .into_owned()
            }
        };

        let albedo = resolve(pbr.albedo_map());
        pbr.set_albedo_map(albedo);

        let normal = resolve(pbr.normal_map());
        let space = pbr.normal_map_type();
        pbr.set_normal_map(normal, space);

        let environment = resolve(pbr.environment_map());
        pbr.set_environment_map(environment);

        let ambient_occlusion = resolve(pbr.ambient_occlusion_map());
        pbr.set_ambient_occlusion_map(ambient_occlusion);

        let roughness = resolve(pbr.roughness_map());
        pbr.set_roughness_map(roughness);

        let metalness = resolve(pbr.metalness_map());
        pbr.set_metalness_map(metalness);

        let emissive = resolve(pbr.emissive_map());
        pbr.set_emissive_map(emissive);

        let light = resolve(pbr.light_map());
        let uv_set = pbr.light_map_tex_coord_set();
        pbr.set_light_map(light, uv_set);

        let glossiness = resolve(pbr.glossiness_map());
        pbr.set_glossiness_map(glossiness);

        let specular = resolve(pbr.specular_map());
        pbr.set_specular_map(specular);
    }
}
