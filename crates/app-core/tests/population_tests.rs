// One-shot population generation: counts, attribute ranges, weighted draws.

use app_core::constants::{
    hex_to_vec3, GOLD_METALLIC, GOLD_ROSE, GREEN_RICH, ORNAMENT_PUSH_OUT, RED_BRIGHT, RED_VELVET,
    WHITE_WARM,
};
use app_core::population::{
    generate_emblem, generate_foliage, generate_ornaments, OrnamentSeed, OrnamentTables,
    SceneParams,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn foliage_seeds_have_bounded_attributes() {
    let params = SceneParams::default();
    let mut rng = StdRng::seed_from_u64(11);
    let seeds = generate_foliage(&mut rng, &params);
    assert_eq!(seeds.len(), params.foliage_count);
    for s in &seeds {
        assert!(s.scatter_pos.length() <= params.scatter_radius + 1e-4);
        assert!(s.size >= 0.3 && s.size <= 1.1 + 1e-5, "size {}", s.size);
        assert!((0.0..1.0).contains(&s.random));
        assert!(s.tree_pos.y >= -params.tree_height / 2.0);
        assert!(s.tree_pos.y < params.tree_height / 2.0);
    }
}

#[test]
fn ornament_kind_fractions_match_weights() {
    let params = SceneParams {
        ornament_count: 100_000,
        ..SceneParams::default()
    };
    let tables = OrnamentTables::new().unwrap();
    let mut rng = StdRng::seed_from_u64(12);
    let sets = generate_ornaments(&mut rng, &params, &tables);
    assert_eq!(sets.total(), params.ornament_count);
    let frac = |n: usize| n as f64 / params.ornament_count as f64;
    assert!(
        (frac(sets.boxes.len()) - 0.15).abs() < 0.01,
        "box fraction {}",
        frac(sets.boxes.len())
    );
    assert!(
        (frac(sets.spheres.len()) - 0.35).abs() < 0.01,
        "sphere fraction {}",
        frac(sets.spheres.len())
    );
    assert!(
        (frac(sets.lights.len()) - 0.50).abs() < 0.01,
        "light fraction {}",
        frac(sets.lights.len())
    );
}

fn assert_colors_from(seeds: &[OrnamentSeed], allowed: &[u32]) {
    let palette: Vec<Vec3> = allowed.iter().map(|&hex| hex_to_vec3(hex)).collect();
    for s in seeds {
        assert!(
            palette.iter().any(|&c| c == s.color),
            "color {:?} not in the kind palette",
            s.color
        );
    }
}

#[test]
fn ornament_colors_come_from_their_kind_palette() {
    let params = SceneParams {
        ornament_count: 5_000,
        ..SceneParams::default()
    };
    let tables = OrnamentTables::new().unwrap();
    let mut rng = StdRng::seed_from_u64(14);
    let sets = generate_ornaments(&mut rng, &params, &tables);
    assert_colors_from(&sets.boxes, &[GOLD_ROSE, RED_VELVET, GREEN_RICH]);
    assert_colors_from(&sets.spheres, &[GOLD_METALLIC, RED_BRIGHT, GREEN_RICH]);
    assert_colors_from(&sets.lights, &[GOLD_METALLIC, WHITE_WARM]);
}

#[test]
fn light_color_split_is_one_to_four() {
    let params = SceneParams {
        ornament_count: 100_000,
        ..SceneParams::default()
    };
    let tables = OrnamentTables::new().unwrap();
    let mut rng = StdRng::seed_from_u64(15);
    let sets = generate_ornaments(&mut rng, &params, &tables);
    let gold = hex_to_vec3(GOLD_METALLIC);
    let golds = sets.lights.iter().filter(|s| s.color == gold).count();
    let frac = golds as f64 / sets.lights.len() as f64;
    assert!((frac - 0.2).abs() < 0.015, "gold light fraction {frac}");
}

#[test]
fn ornament_attributes_are_bounded_and_pushed_outward() {
    let params = SceneParams::default();
    let tables = OrnamentTables::new().unwrap();
    let mut rng = StdRng::seed_from_u64(16);
    let sets = generate_ornaments(&mut rng, &params, &tables);
    let mut outside_taper = 0usize;
    for s in sets
        .boxes
        .iter()
        .chain(sets.spheres.iter())
        .chain(sets.lights.iter())
    {
        assert!(s.scale >= 0.3 && s.scale <= 0.8 + 1e-5, "scale {}", s.scale);
        assert!(s.rotation.z == 0.0);
        assert!(s.scatter_pos.length() <= params.scatter_radius + 1e-4);
        let frac = (s.tree_pos.y + params.tree_height / 2.0) / params.tree_height;
        let taper = params.tree_radius_bottom * (1.0 - frac).powf(0.9);
        let radial = (s.tree_pos.x * s.tree_pos.x + s.tree_pos.z * s.tree_pos.z).sqrt();
        assert!(
            radial <= taper * ORNAMENT_PUSH_OUT + 1e-4,
            "radius {radial} exceeds pushed taper"
        );
        if radial > taper + 1e-4 {
            outside_taper += 1;
        }
    }
    // the 5% push must actually move a visible share past the bare cone
    assert!(outside_taper > 0, "no ornament sits outside the foliage");
}

#[test]
fn emblem_targets_the_apex() {
    let params = SceneParams::default();
    let mut rng = StdRng::seed_from_u64(17);
    let emblem = generate_emblem(&mut rng, &params);
    assert_eq!(
        emblem.tree_pos,
        Vec3::new(0.0, params.tree_height / 2.0 + 0.2, 0.0)
    );
    assert!(emblem.scatter_pos.length() <= params.scatter_radius + 1e-4);
}
