//! Material inspection tool
//!
//! Loads every material of an MTL file, reports which descriptions are equal
//! and would share one renderer resource, and optionally saves them as a
//! material library.
//!
//! ```text
//! pbr_inspect <file.mtl> [--save <library.toml|library.ron>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use pbr_material::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
enum InspectError {
    #[error("{0}\nusage: pbr_inspect <file.mtl> [--save <library.toml|library.ron>]")]
    Usage(String),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

struct Args {
    mtl_path: PathBuf,
    save_path: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, InspectError> {
        let mut mtl_path = None;
        let mut save_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--save" => {
                    let path = args
                        .next()
                        .ok_or_else(|| InspectError::Usage("--save needs a path".to_string()))?;
                    save_path = Some(PathBuf::from(path));
                }
                _ if mtl_path.is_none() => mtl_path = Some(PathBuf::from(arg)),
                _ => return Err(InspectError::Usage(format!("unexpected argument '{arg}'"))),
            }
        }

        Ok(Self {
            mtl_path: mtl_path.ok_or_else(|| InspectError::Usage("missing MTL file".to_string()))?,
            save_path,
        })
    }
}

fn run(args: &Args) -> Result<(), InspectError> {
    let materials = MaterialLoader::load_all_mtl(&args.mtl_path)?;
    log::info!("Loaded {} materials from {:?}", materials.len(), args.mtl_path);

    let cache: MaterialCache<String> = MaterialCache::new();
    for (name, pbr) in &materials {
        let shared = cache.get_or_insert_with(pbr, |_| name.clone());
        if shared.as_str() == name {
            log::debug!("{name}: {pbr:?}");
        } else {
            log::info!("{name} is identical to {shared}");
        }
        println!(
            "{name:<24} {:<9} albedo={:?} normal={:?}",
            format!("{:?}", pbr.workflow_type()),
            pbr.albedo_map(),
            pbr.normal_map()
        );
    }

    let library: MaterialLibrary = materials.into_iter().collect();
    println!(
        "{} materials, {} distinct descriptions",
        library.len(),
        cache.len()
    );
    for group in library.equivalence_groups().iter().filter(|group| group.len() > 1) {
        println!("  shared: {}", group.join(", "));
    }

    if let Some(save_path) = &args.save_path {
        library.save_to_file(save_path)?;
        log::info!("Saved material library to {:?}", save_path);
    }

    Ok(())
}

fn main() -> ExitCode {
    pbr_material::logging::init_with_level("info");

    let result = Args::parse(std::env::args().skip(1)).and_then(|args| run(&args));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
