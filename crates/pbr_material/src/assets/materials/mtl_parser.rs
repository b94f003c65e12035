//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl files, including the common PBR extensions
//! (`Pr`, `Pm`, `map_Pr`, `map_Pm`, `norm`), into [`Pbr`] descriptions.
//! Phong colors and transparency have no counterpart in a PBR description and
//! are ignored.

use std::collections::HashMap;

use crate::error::{MaterialError, MaterialResult};
use crate::pbr::{NormalMapSpace, Pbr, PbrType};

/// Largest specular exponent an MTL file is expected to use
const MAX_SPECULAR_EXPONENT: f64 = 1000.0;

/// Material being assembled from consecutive statements
struct PendingMaterial {
    name: String,
    pbr: Pbr,
    saw_metal: bool,
    saw_specular: bool,
}

impl PendingMaterial {
    fn new(name: String) -> Self {
        Self {
            name,
            pbr: Pbr::new(),
            saw_metal: false,
            saw_specular: false,
        }
    }

    /// Pick the workflow from the statements seen. Metal statements win.
    fn finish(mut self) -> (String, Pbr) {
        let workflow = if self.saw_metal {
            PbrType::Metal
        } else if self.saw_specular {
            PbrType::Specular
        } else {
            PbrType::None
        };
        self.pbr.set_workflow_type(workflow);
        (self.name, self.pbr)
    }
}

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Parse MTL file contents into a map of material name -> description
    ///
    /// # Arguments
    /// * `contents` - The text contents of the MTL file
    ///
    /// # Returns
    /// A `HashMap` mapping material names to their descriptions. Texture paths
    /// are returned exactly as written in the file.
    pub fn parse(contents: &str) -> MaterialResult<HashMap<String, Pbr>> {
        let mut materials = HashMap::new();
        let mut current: Option<PendingMaterial> = None;

        for (line_num, line) in contents.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };

            if command == "newmtl" {
                if let Some(pending) = current.take() {
                    Self::store(&mut materials, pending);
                }

                let name = tokens
                    .next()
                    .ok_or_else(|| parse_error(line_num, "newmtl missing material name"))?;
                current = Some(PendingMaterial::new(name.to_string()));
                continue;
            }

            let Some(mat) = current.as_mut() else {
                log::debug!("Line {}: '{}' outside of any material, ignored", line_num + 1, command);
                continue;
            };

            match command {
                "map_Kd" => {
                    mat.pbr.set_albedo_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                }

                "map_Bump" | "bump" | "norm" => {
                    let path = Self::parse_texture_path(&mut tokens, line_num, command)?;
                    mat.pbr.set_normal_map(path, NormalMapSpace::Tangent);
                }

                "map_Ka" => {
                    mat.pbr
                        .set_ambient_occlusion_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                }

                "map_Ke" => {
                    mat.pbr.set_emissive_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                }

                "refl" | "map_refl" => {
                    mat.pbr.set_environment_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                }

                "Pr" => {
                    mat.pbr.set_roughness(Self::parse_f64(&mut tokens, line_num, command)?);
                    mat.saw_metal = true;
                }

                "Pm" => {
                    mat.pbr.set_metalness(Self::parse_f64(&mut tokens, line_num, command)?);
                    mat.saw_metal = true;
                }

                "map_Pr" => {
                    mat.pbr.set_roughness_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                    mat.saw_metal = true;
                }

                "map_Pm" => {
                    mat.pbr.set_metalness_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                    mat.saw_metal = true;
                }

                "map_Ks" => {
                    mat.pbr.set_specular_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                    mat.saw_specular = true;
                }

                "map_Ns" => {
                    mat.pbr.set_glossiness_map(Self::parse_texture_path(&mut tokens, line_num, command)?);
                    mat.saw_specular = true;
                }

                "Ns" => {
                    // Specular exponent 0..1000 maps linearly onto glossiness 0..1.
                    // Every Phong material carries Ns, so it does not select a workflow.
                    let exponent = Self::parse_f64(&mut tokens, line_num, command)?;
                    mat.pbr
                        .set_glossiness(exponent.clamp(0.0, MAX_SPECULAR_EXPONENT) / MAX_SPECULAR_EXPONENT);
                }

                // Phong-only statements
                "Ka" | "Kd" | "Ks" | "Ke" | "Tf" | "Ni" | "d" | "Tr" | "illum" | "map_d" | "disp"
                | "decal" => {}

                _ => {
                    log::debug!("Line {}: unknown MTL statement '{}'", line_num + 1, command);
                }
            }
        }

        if let Some(pending) = current {
            Self::store(&mut materials, pending);
        }

        Ok(materials)
    }

    /// Add a finished material; a later definition replaces an earlier one
    fn store(materials: &mut HashMap<String, Pbr>, pending: PendingMaterial) {
        let (name, pbr) = pending.finish();
        if materials.insert(name.clone(), pbr).is_some() {
            log::warn!("Material '{}' defined more than once, keeping the last definition", name);
        }
    }

    /// Parse a single f64 value
    fn parse_f64<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> MaterialResult<f64>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(line_num, format!("{command} missing value")))?;
        token
            .parse::<f64>()
            .map_err(|_| parse_error(line_num, format!("{command} invalid float value '{token}'")))
    }

    /// Parse texture file path, skipping leading texture options.
    ///
    /// The path is the rest of the line, so it may contain spaces.
    fn parse_texture_path<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> MaterialResult<String>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut tokens = tokens.peekable();
        while let Some(option) = tokens.next_if(|token| token.starts_with('-')) {
            let (min_args, max_args) = option_arity(option);
            for taken in 0..max_args {
                let next = tokens.peek().copied();
                let is_number = next.is_some_and(|t| t.parse::<f64>().is_ok());
                if taken >= min_args && !is_number {
                    break;
                }
                if tokens.next().is_none() {
                    return Err(parse_error(line_num, format!("{command} option {option} missing value")));
                }
            }
        }

        let path: Vec<&str> = tokens.collect();
        if path.is_empty() {
            return Err(parse_error(line_num, format!("{command} missing texture path")));
        }
        Ok(path.join(" "))
    }
}

/// Minimum and maximum argument count of a texture map option
fn option_arity(option: &str) -> (usize, usize) {
    match option {
        "-o" | "-s" | "-t" => (1, 3),
        "-mm" => (2, 2),
        "-blendu" | "-blendv" | "-bm" | "-boost" | "-cc" | "-clamp" | "-imfchan" | "-texres" | "-type" => (1, 1),
        _ => (0, 0),
    }
}

fn parse_error(line_num: usize, message: impl Into<String>) -> MaterialError {
    MaterialError::Parse {
        line: line_num + 1,
        message: message.into(),
    }
}
