//! Value semantics of material descriptions: defaults, equality, copy and move.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pbr_material::{MaterialBuilder, NormalMapSpace, Pbr, PbrType};

fn hash_of(pbr: &Pbr) -> u64 {
    let mut hasher = DefaultHasher::new();
    pbr.hash(&mut hasher);
    hasher.finish()
}

/// A handful of distinct descriptions touching every field group
fn samples() -> Vec<Pbr> {
    let mut metal = Pbr::new();
    metal.set_workflow_type(PbrType::Metal);
    metal.set_albedo_map("albedo.png");
    metal.set_metalness_map("metal.png");
    metal.set_roughness(0.4);

    let mut specular = Pbr::new();
    specular.set_workflow_type(PbrType::Specular);
    specular.set_glossiness_map("gloss.png");
    specular.set_glossiness(0.8);

    let mut everything = MaterialBuilder::new()
        .workflow(PbrType::Metal)
        .albedo_map("a.png")
        .normal_map("n.png", NormalMapSpace::Object)
        .environment_map("env.dds")
        .ambient_occlusion_map("ao.png")
        .roughness_map("r.png")
        .metalness_map("m.png")
        .emissive_map("e.png")
        .light_map("l.png", 1)
        .metalness(0.2)
        .roughness(0.7)
        .glossiness_map("g.png")
        .glossiness(0.3)
        .specular_map("s.png")
        .build();
    everything.set_workflow_type(PbrType::Specular);

    vec![Pbr::new(), metal, specular, everything]
}

#[test]
fn test_default_state() {
    let d = Pbr::default();
    assert_eq!(d.workflow_type(), PbrType::None);
    for path in [
        d.albedo_map(),
        d.normal_map(),
        d.environment_map(),
        d.ambient_occlusion_map(),
        d.roughness_map(),
        d.metalness_map(),
        d.emissive_map(),
        d.light_map(),
        d.glossiness_map(),
        d.specular_map(),
    ] {
        assert!(path.is_empty());
    }
    assert_eq!(d.normal_map_type(), NormalMapSpace::Tangent);
    assert_eq!(d.light_map_tex_coord_set(), 0);
}

#[test]
fn test_equality_laws() {
    let items = samples();
    for a in &items {
        assert_eq!(a, a);
        for b in &items {
            assert_eq!(a == b, b == a);
            assert_eq!(a != b, !(a == b));
            for c in &items {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}

#[test]
fn test_copy_law() {
    for a in samples() {
        let mut b = a.clone();
        assert_eq!(b, a);

        let before = a.albedo_map().to_string();
        b.set_albedo_map("changed.png");
        b.set_metalness(9.0);
        assert_eq!(a.albedo_map(), before);
        assert_ne!(a.metalness(), 9.0);
        assert_ne!(a, b);
    }
}

#[test]
fn test_move_law() {
    for a in samples() {
        let snapshot = a.clone();
        let b = a;
        assert_eq!(b, snapshot);
    }
}

#[test]
fn test_setter_round_trip() {
    let mut m = Pbr::new();

    m.set_albedo_map("p1");
    assert_eq!(m.albedo_map(), "p1");
    m.set_environment_map("p2");
    assert_eq!(m.environment_map(), "p2");
    m.set_ambient_occlusion_map("p3");
    assert_eq!(m.ambient_occlusion_map(), "p3");
    m.set_roughness_map("p4");
    assert_eq!(m.roughness_map(), "p4");
    m.set_metalness_map("p5");
    assert_eq!(m.metalness_map(), "p5");
    m.set_emissive_map("p6");
    assert_eq!(m.emissive_map(), "p6");
    m.set_glossiness_map("p7");
    assert_eq!(m.glossiness_map(), "p7");
    m.set_specular_map("p8");
    assert_eq!(m.specular_map(), "p8");
    m.set_metalness(0.11);
    assert_eq!(m.metalness(), 0.11);
    m.set_roughness(0.22);
    assert_eq!(m.roughness(), 0.22);
    m.set_glossiness(0.33);
    assert_eq!(m.glossiness(), 0.33);
    m.set_workflow_type(PbrType::Specular);
    assert_eq!(m.workflow_type(), PbrType::Specular);

    // Setting an earlier field again leaves the others alone
    m.set_albedo_map("");
    assert!(m.albedo_map().is_empty());
    assert_eq!(m.specular_map(), "p8");
}

#[test]
fn test_composite_setter() {
    let mut m = Pbr::new();
    m.set_normal_map("normal.png", NormalMapSpace::Object);
    assert_eq!(m.normal_map(), "normal.png");
    assert_eq!(m.normal_map_type(), NormalMapSpace::Object);

    m.set_light_map("light.png", 4);
    assert_eq!(m.light_map(), "light.png");
    assert_eq!(m.light_map_tex_coord_set(), 4);
}

#[test]
fn test_single_field_flips_equality() {
    let mut a = Pbr::new();
    a.set_roughness(0.5);
    let mut b = a.clone();
    assert_eq!(a, b);

    b.set_roughness(0.6);
    assert_ne!(a, b);

    let mut c = a.clone();
    c.set_normal_map("", NormalMapSpace::Object);
    assert_ne!(a, c);

    let mut d = a.clone();
    d.set_light_map("", 1);
    assert_ne!(a, d);
}

/// Set a field away from its value in `populated()`
type Change = fn(&mut Pbr);
/// Copy a field back from `populated()`
type Restore = fn(&mut Pbr, &Pbr);

/// Every field set to a non-default value
fn populated() -> Pbr {
    MaterialBuilder::new()
        .workflow(PbrType::Metal)
        .albedo_map("a.png")
        .normal_map("n.png", NormalMapSpace::Object)
        .environment_map("env.dds")
        .ambient_occlusion_map("ao.png")
        .roughness_map("r.png")
        .metalness_map("m.png")
        .emissive_map("e.png")
        .light_map("l.png", 2)
        .metalness(0.2)
        .roughness(0.7)
        .glossiness_map("g.png")
        .glossiness(0.3)
        .specular_map("s.png")
        .build()
}

#[test]
fn test_every_field_takes_part_in_equality_and_hash() {
    let fields: [(&str, Change, Restore); 16] = [
        (
            "workflow_type",
            |m| m.set_workflow_type(PbrType::Specular),
            |m, b| m.set_workflow_type(b.workflow_type()),
        ),
        ("albedo_map", |m| m.set_albedo_map("x.png"), |m, b| m.set_albedo_map(b.albedo_map())),
        (
            "normal_map",
            |m| {
                let space = m.normal_map_type();
                m.set_normal_map("x.png", space);
            },
            |m, b| {
                let space = m.normal_map_type();
                m.set_normal_map(b.normal_map(), space);
            },
        ),
        (
            "normal_map_type",
            |m| {
                let path = m.normal_map().to_string();
                m.set_normal_map(path, NormalMapSpace::Tangent);
            },
            |m, b| {
                let path = m.normal_map().to_string();
                m.set_normal_map(path, b.normal_map_type());
            },
        ),
        (
            "environment_map",
            |m| m.set_environment_map("x.dds"),
            |m, b| m.set_environment_map(b.environment_map()),
        ),
        (
            "ambient_occlusion_map",
            |m| m.set_ambient_occlusion_map("x.png"),
            |m, b| m.set_ambient_occlusion_map(b.ambient_occlusion_map()),
        ),
        (
            "roughness_map",
            |m| m.set_roughness_map("x.png"),
            |m, b| m.set_roughness_map(b.roughness_map()),
        ),
        (
            "metalness_map",
            |m| m.set_metalness_map("x.png"),
            |m, b| m.set_metalness_map(b.metalness_map()),
        ),
        (
            "emissive_map",
            |m| m.set_emissive_map("x.png"),
            |m, b| m.set_emissive_map(b.emissive_map()),
        ),
        (
            "light_map",
            |m| {
                let uv = m.light_map_tex_coord_set();
                m.set_light_map("x.png", uv);
            },
            |m, b| {
                let uv = m.light_map_tex_coord_set();
                m.set_light_map(b.light_map(), uv);
            },
        ),
        (
            "light_map_tex_coord_set",
            |m| {
                let path = m.light_map().to_string();
                m.set_light_map(path, 5);
            },
            |m, b| {
                let path = m.light_map().to_string();
                m.set_light_map(path, b.light_map_tex_coord_set());
            },
        ),
        ("metalness", |m| m.set_metalness(0.9), |m, b| m.set_metalness(b.metalness())),
        ("roughness", |m| m.set_roughness(0.1), |m, b| m.set_roughness(b.roughness())),
        (
            "glossiness_map",
            |m| m.set_glossiness_map("x.png"),
            |m, b| m.set_glossiness_map(b.glossiness_map()),
        ),
        ("glossiness", |m| m.set_glossiness(0.6), |m, b| m.set_glossiness(b.glossiness())),
        (
            "specular_map",
            |m| m.set_specular_map("x.png"),
            |m, b| m.set_specular_map(b.specular_map()),
        ),
    ];

    let base = populated();
    for (name, change, restore) in fields {
        let mut m = base.clone();

        change(&mut m);
        assert_ne!(m, base, "changing {name} must break equality");
        assert_ne!(hash_of(&m), hash_of(&base), "changing {name} must change the hash");

        restore(&mut m, &base);
        assert_eq!(m, base, "restoring {name} must restore equality");
        assert_eq!(hash_of(&m), hash_of(&base), "restoring {name} must restore the hash");
    }
}

#[test]
fn test_inactive_workflow_fields_are_kept() {
    let mut m = Pbr::new();
    m.set_workflow_type(PbrType::Metal);
    m.set_glossiness(0.9);
    m.set_specular_map("spec.png");

    m.set_workflow_type(PbrType::Specular);
    assert_eq!(m.glossiness(), 0.9);
    assert_eq!(m.specular_map(), "spec.png");
}

#[test]
fn test_scenario_metal_order_independent() {
    let mut m1 = Pbr::new();
    m1.set_workflow_type(PbrType::Metal);
    m1.set_albedo_map("albedo.png");
    m1.set_metalness_map("metal.png");
    m1.set_roughness(0.4);

    let mut m2 = Pbr::new();
    m2.set_roughness(0.4);
    m2.set_metalness_map("metal.png");
    m2.set_albedo_map("albedo.png");
    m2.set_workflow_type(PbrType::Metal);

    assert_eq!(m1, m2);
}

#[test]
fn test_scenario_specular_copy_then_mutate() {
    let mut m1 = Pbr::new();
    m1.set_workflow_type(PbrType::Specular);
    m1.set_glossiness_map("gloss.png");
    m1.set_glossiness(0.8);

    let mut m2 = m1.clone();
    m2.set_glossiness(0.9);

    assert_ne!(m1, m2);
    assert_eq!(m1.glossiness(), 0.8);
}

#[test]
fn test_shared_between_threads() {
    let pbr = std::sync::Arc::new(MaterialBuilder::metal(1.0, 0.25));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pbr = std::sync::Arc::clone(&pbr);
            std::thread::spawn(move || pbr.roughness())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0.25);
    }
}
