use glam::Vec3;

// Shared scene tuning constants used by the engine and the frontends.

// Scene composition
pub const FOLIAGE_COUNT: usize = 15000; // glow particles forming the silhouette
pub const ORNAMENT_COUNT: usize = 900; // instanced boxes, spheres and lights
pub const TREE_HEIGHT: f32 = 15.0;
pub const TREE_RADIUS_BOTTOM: f32 = 6.5;
pub const SCATTER_RADIUS: f32 = 25.0; // radius of the dispersal sphere
pub const ANIMATION_SPEED: f32 = 2.0; // progress units per second

pub const WORLD_OFFSET: Vec3 = Vec3::new(0.0, -2.0, 0.0); // world-space offset applied to the whole scene

// Population shaping
pub const ORNAMENT_PUSH_OUT: f32 = 1.05; // radial factor keeping ornaments outside the foliage
pub const EMBLEM_APEX_OFFSET: f32 = 0.2; // lift above the cone apex

// Secondary motion
pub const FOLIAGE_BREATHE_INTENSITY: f32 = 0.5; // world units at full scatter, fades to zero assembled
pub const BOX_FLOAT_ROT_SPEED: f32 = 0.5; // rad/s while scattered
pub const SPHERE_FLOAT_ROT_SPEED_X: f32 = 0.2;
pub const SPHERE_FLOAT_ROT_SPEED_Y: f32 = 0.3;
pub const LIGHT_SCALE_FACTOR: f32 = 0.3; // lights render smaller than their stored scale
pub const LIGHT_PULSE_AMPLITUDE: f32 = 0.2;
pub const EMBLEM_SPIN_SPEED: f32 = 0.8; // rad/s yaw, never stops
pub const EMBLEM_SETTLE_THRESHOLD: f32 = 0.8; // raw progress above which the emblem pulses and wobbles
pub const EMBLEM_SCALE: f32 = 1.2; // rest scale of the emblem mesh

// Emissive strength per population (mirrors the ornament materials)
pub const EMISSIVE_BOX: f32 = 0.0;
pub const EMISSIVE_SPHERE: f32 = 0.1;
pub const EMISSIVE_LIGHT: f32 = 2.0;
pub const EMISSIVE_EMBLEM: f32 = 0.8;

// Palette (0xRRGGBB)
pub const EMERALD_DEEP: u32 = 0x00241B;
pub const EMERALD_LIGHT: u32 = 0x004D3A;
pub const GOLD_METALLIC: u32 = 0xDBB42C;
pub const GOLD_ROSE: u32 = 0xEAC076;
pub const WHITE_WARM: u32 = 0xFFFDD0;
pub const RED_VELVET: u32 = 0x5E0E0E;
pub const RED_BRIGHT: u32 = 0xC41E3A;
pub const GREEN_RICH: u32 = 0x1A5236;

pub const BACKGROUND: u32 = 0x000504; // clear color behind everything

/// Expand a 0xRRGGBB constant into RGB components in [0, 1].
pub fn hex_to_vec3(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}
