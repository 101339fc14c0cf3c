// Sanity checks on the scene constants and their relationships.

use app_core::constants::*;
use glam::Vec3;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_positive() {
    assert!(FOLIAGE_COUNT > 0);
    assert!(ORNAMENT_COUNT > 0);
    assert!(TREE_HEIGHT > 0.0);
    assert!(TREE_RADIUS_BOTTOM > 0.0);
    assert!(SCATTER_RADIUS > 0.0);
    assert!(ANIMATION_SPEED > 0.0);
    assert!(EMBLEM_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // the scatter cloud must enclose the assembled tree
    assert!(SCATTER_RADIUS > TREE_RADIUS_BOTTOM);
    assert!(SCATTER_RADIUS > TREE_HEIGHT / 2.0 + EMBLEM_APEX_OFFSET);
    // foliage dominates the ornament population
    assert!(FOLIAGE_COUNT > ORNAMENT_COUNT);
    // the outward push is a small factor above one
    assert!(ORNAMENT_PUSH_OUT > 1.0 && ORNAMENT_PUSH_OUT < 1.2);
    // thresholds and amplitudes stay inside their working ranges
    assert!(EMBLEM_SETTLE_THRESHOLD > 0.0 && EMBLEM_SETTLE_THRESHOLD < 1.0);
    assert!(LIGHT_PULSE_AMPLITUDE > 0.0 && LIGHT_PULSE_AMPLITUDE < 1.0);
    assert!(LIGHT_SCALE_FACTOR > 0.0 && LIGHT_SCALE_FACTOR < 1.0);
    assert!(FOLIAGE_BREATHE_INTENSITY > 0.0);
    // lights out-glow the other ornaments
    assert!(EMISSIVE_LIGHT > EMISSIVE_SPHERE);
    assert!(EMISSIVE_LIGHT > EMISSIVE_EMBLEM);
    assert!(EMISSIVE_BOX >= 0.0);
}

#[test]
fn palette_fits_rgb24() {
    for hex in [
        EMERALD_DEEP,
        EMERALD_LIGHT,
        GOLD_METALLIC,
        GOLD_ROSE,
        WHITE_WARM,
        RED_VELVET,
        RED_BRIGHT,
        GREEN_RICH,
        BACKGROUND,
    ] {
        assert!(hex <= 0xFFFFFF, "palette entry {hex:#08x} overflows 24 bits");
        let c = hex_to_vec3(hex);
        for channel in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn hex_expansion_hits_exact_channel_values() {
    assert_eq!(hex_to_vec3(0x000000), Vec3::ZERO);
    assert_eq!(hex_to_vec3(0xFFFFFF), Vec3::ONE);
    let gold = hex_to_vec3(GOLD_METALLIC);
    assert!((gold.x - 219.0 / 255.0).abs() < 1e-6);
    assert!((gold.y - 180.0 / 255.0).abs() < 1e-6);
    assert!((gold.z - 44.0 / 255.0).abs() < 1e-6);
}
