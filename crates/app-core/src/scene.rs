//! Per-frame update of the three animated populations.
//!
//! `SceneEngine` owns the generated seeds, the single authoritative progress
//! value and pre-allocated GPU-ready instance buffers. Every `tick` fully
//! overwrites every displayed transform from the immutable seeds, the eased
//! progress and the elapsed time; nothing depends on the previous frame's
//! displayed values, so there is no accumulation error.

use bytemuck::Zeroable;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use std::time::Duration;

use crate::constants::{
    BOX_FLOAT_ROT_SPEED, EMBLEM_SCALE, EMBLEM_SETTLE_THRESHOLD, EMBLEM_SPIN_SPEED, EMISSIVE_BOX,
    EMISSIVE_EMBLEM, EMISSIVE_LIGHT, EMISSIVE_SPHERE, FOLIAGE_BREATHE_INTENSITY, GOLD_METALLIC,
    LIGHT_PULSE_AMPLITUDE, LIGHT_SCALE_FACTOR, SPHERE_FLOAT_ROT_SPEED_X, SPHERE_FLOAT_ROT_SPEED_Y,
    hex_to_vec3,
};
use crate::pick::TableError;
use crate::population::{
    generate_emblem, generate_foliage, generate_ornaments, EmblemSeed, FoliageSeed, OrnamentSeed,
    OrnamentSets, OrnamentTables, SceneParams,
};
use crate::progress::{ease_in_out_cubic, ease_in_out_quad, Phase, Progress};

/// Per-point render attributes for the foliage population.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Per-instance transform and material for the mesh populations.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: f32,
}

impl MeshInstance {
    fn compose(position: Vec3, rotation: Quat, scale: f32, color: Vec3, emissive: f32) -> Self {
        Self {
            model: Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
                .to_cols_array_2d(),
            color: [color.x, color.y, color.z, 1.0],
            emissive,
        }
    }

    /// Translation column of the model matrix.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }

    /// Uniform scale recovered from the first basis column.
    pub fn uniform_scale(&self) -> f32 {
        Vec3::new(self.model[0][0], self.model[0][1], self.model[0][2]).length()
    }
}

/// The animation engine: three populations chasing one progress value.
pub struct SceneEngine {
    pub params: SceneParams,
    foliage: Vec<FoliageSeed>,
    ornaments: OrnamentSets,
    emblem: EmblemSeed,
    progress: Progress,
    elapsed: f32,
    foliage_out: Vec<PointInstance>,
    box_out: Vec<MeshInstance>,
    sphere_out: Vec<MeshInstance>,
    light_out: Vec<MeshInstance>,
    emblem_out: [MeshInstance; 1],
}

impl SceneEngine {
    /// Generate all populations once from the given seed and pre-allocate the
    /// displayed-transform buffers. Populations never change size afterwards.
    pub fn new(params: SceneParams, seed: u64) -> Result<Self, TableError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let tables = OrnamentTables::new()?;
        let foliage = generate_foliage(&mut rng, &params);
        let ornaments = generate_ornaments(&mut rng, &params, &tables);
        let emblem = generate_emblem(&mut rng, &params);
        log::info!(
            "[scene] foliage={} boxes={} spheres={} lights={}",
            foliage.len(),
            ornaments.boxes.len(),
            ornaments.spheres.len(),
            ornaments.lights.len()
        );

        let foliage_out = vec![PointInstance::zeroed(); foliage.len()];
        let box_out = vec![MeshInstance::zeroed(); ornaments.boxes.len()];
        let sphere_out = vec![MeshInstance::zeroed(); ornaments.spheres.len()];
        let light_out = vec![MeshInstance::zeroed(); ornaments.lights.len()];

        let progress = Progress::new(params.animation_speed);
        let mut engine = Self {
            params,
            foliage,
            ornaments,
            emblem,
            progress,
            elapsed: 0.0,
            foliage_out,
            box_out,
            sphere_out,
            light_out,
            emblem_out: [MeshInstance::zeroed()],
        };
        // Fill the buffers so the first presented frame is already valid
        engine.tick(Phase::Scattered, Duration::ZERO);
        Ok(engine)
    }

    /// One frame: advance the chase, recompute both ease curves from the raw
    /// value and overwrite every instance buffer.
    pub fn tick(&mut self, phase: Phase, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        self.elapsed += dt_sec;
        let raw = self.progress.advance(phase, dt_sec);
        let t_cubic = ease_in_out_cubic(raw);
        let t_quad = ease_in_out_quad(raw);
        let time = self.elapsed;

        self.update_foliage(t_cubic, time);
        self.update_ornaments(t_quad, time);
        self.update_emblem(raw, t_quad, time);
    }

    fn update_foliage(&mut self, t: f32, time: f32) {
        let breathe = FOLIAGE_BREATHE_INTENSITY * (1.0 - t);
        for (seed, out) in self.foliage.iter().zip(self.foliage_out.iter_mut()) {
            let mut pos = seed.scatter_pos.lerp(seed.tree_pos, t);
            pos.y += (time * 2.0 + seed.random * 10.0).sin() * breathe;
            pos.x += (time * 1.5 + seed.random * 10.0).cos() * breathe * 0.5;
            let alpha = 0.8 + 0.2 * (time * 3.0 + seed.random * 20.0).sin();
            *out = PointInstance {
                position: pos.to_array(),
                size: seed.size,
                color: [1.0, 1.0, 1.0, alpha],
            };
        }
    }

    fn update_ornaments(&mut self, t: f32, time: f32) {
        // Boxes tumble while scattered and settle as the tree assembles
        let float_rot = (1.0 - t) * time * BOX_FLOAT_ROT_SPEED;
        for (seed, out) in self.ornaments.boxes.iter().zip(self.box_out.iter_mut()) {
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                seed.rotation.x + float_rot,
                seed.rotation.y + float_rot,
                seed.rotation.z,
            );
            *out = Self::ornament_instance(seed, t, rotation, seed.scale, EMISSIVE_BOX);
        }

        for (seed, out) in self.ornaments.spheres.iter().zip(self.sphere_out.iter_mut()) {
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                seed.rotation.x + time * SPHERE_FLOAT_ROT_SPEED_X * (1.0 - t),
                seed.rotation.y + time * SPHERE_FLOAT_ROT_SPEED_Y * (1.0 - t),
                seed.rotation.z,
            );
            *out = Self::ornament_instance(seed, t, rotation, seed.scale, EMISSIVE_SPHERE);
        }

        // Lights keep pulsing whether scattered or assembled
        for (seed, out) in self.ornaments.lights.iter().zip(self.light_out.iter_mut()) {
            let pulse = 1.0 + LIGHT_PULSE_AMPLITUDE * (time * 3.0 + seed.random * TAU).sin();
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                seed.rotation.x,
                seed.rotation.y,
                seed.rotation.z,
            );
            let scale = seed.scale * LIGHT_SCALE_FACTOR * pulse;
            *out = Self::ornament_instance(seed, t, rotation, scale, EMISSIVE_LIGHT);
        }
    }

    fn ornament_instance(
        seed: &OrnamentSeed,
        t: f32,
        rotation: Quat,
        scale: f32,
        emissive: f32,
    ) -> MeshInstance {
        let position = seed.scatter_pos.lerp(seed.tree_pos, t);
        MeshInstance::compose(position, rotation, scale, seed.color, emissive)
    }

    fn update_emblem(&mut self, raw: f32, t: f32, time: f32) {
        let position = self.emblem.scatter_pos.lerp(self.emblem.tree_pos, t);
        let yaw = -time * EMBLEM_SPIN_SPEED;
        // Pulse and wobble only once the tree has essentially formed
        let (scale, roll) = if raw > EMBLEM_SETTLE_THRESHOLD {
            (
                EMBLEM_SCALE * (1.0 + 0.05 * (time * 2.0).sin()),
                0.05 * time.sin(),
            )
        } else {
            (EMBLEM_SCALE, 0.0)
        };
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.0, yaw, roll);
        self.emblem_out[0] = MeshInstance::compose(
            position,
            rotation,
            scale,
            hex_to_vec3(GOLD_METALLIC),
            EMISSIVE_EMBLEM,
        );
    }

    // --- read-only views consumed by the frontends and tests ---

    pub fn foliage_instances(&self) -> &[PointInstance] {
        &self.foliage_out
    }

    pub fn box_instances(&self) -> &[MeshInstance] {
        &self.box_out
    }

    pub fn sphere_instances(&self) -> &[MeshInstance] {
        &self.sphere_out
    }

    pub fn light_instances(&self) -> &[MeshInstance] {
        &self.light_out
    }

    pub fn emblem_instance(&self) -> &[MeshInstance] {
        &self.emblem_out
    }

    /// All mesh instances a frontend needs to draw, including the emblem.
    pub fn mesh_instance_total(&self) -> usize {
        self.ornaments.total() + 1
    }

    pub fn foliage_seeds(&self) -> &[FoliageSeed] {
        &self.foliage
    }

    pub fn ornament_seeds(&self) -> &OrnamentSets {
        &self.ornaments
    }

    pub fn emblem_seed(&self) -> &EmblemSeed {
        &self.emblem
    }

    /// Raw (un-eased) progress value.
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
