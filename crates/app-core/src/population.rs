use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::constants::{
    ANIMATION_SPEED, EMBLEM_APEX_OFFSET, FOLIAGE_COUNT, GOLD_METALLIC, GOLD_ROSE, GREEN_RICH,
    ORNAMENT_COUNT, ORNAMENT_PUSH_OUT, RED_BRIGHT, RED_VELVET, SCATTER_RADIUS, TREE_HEIGHT,
    TREE_RADIUS_BOTTOM, WHITE_WARM, hex_to_vec3,
};
use crate::pick::{TableError, WeightedTable};
use crate::sampler::{sample_in_sphere, sample_on_cone};

/// Geometry and pacing of the two target configurations, shared by every
/// generator. Defaults reproduce the reference scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub foliage_count: usize,
    pub ornament_count: usize,
    pub tree_height: f32,
    pub tree_radius_bottom: f32,
    pub scatter_radius: f32,
    pub animation_speed: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            foliage_count: FOLIAGE_COUNT,
            ornament_count: ORNAMENT_COUNT,
            tree_height: TREE_HEIGHT,
            tree_radius_bottom: TREE_RADIUS_BOTTOM,
            scatter_radius: SCATTER_RADIUS,
            animation_speed: ANIMATION_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    Box,
    Sphere,
    Light,
}

/// One foliage particle. Both endpoint positions are fixed at generation;
/// only the displayed transform changes per frame.
#[derive(Clone, Debug)]
pub struct FoliageSeed {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
    /// Persistent phase in [0, 1) desynchronizing the secondary motion.
    pub random: f32,
    pub size: f32,
}

/// One ornament instance.
#[derive(Clone, Debug)]
pub struct OrnamentSeed {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
    /// Base orientation as XYZ euler angles.
    pub rotation: Vec3,
    pub scale: f32,
    pub kind: OrnamentKind,
    pub color: Vec3,
    pub random: f32,
}

/// The single emblem mesh riding the apex of the assembled tree.
#[derive(Clone, Debug)]
pub struct EmblemSeed {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
}

/// Weighted draw tables for ornament kind and per-kind color.
pub struct OrnamentTables {
    pub kind: WeightedTable<OrnamentKind>,
    box_color: WeightedTable<u32>,
    sphere_color: WeightedTable<u32>,
    light_color: WeightedTable<u32>,
}

impl OrnamentTables {
    pub fn new() -> Result<Self, TableError> {
        Ok(Self {
            kind: WeightedTable::new([
                (0.15, OrnamentKind::Box),
                (0.35, OrnamentKind::Sphere),
                (0.50, OrnamentKind::Light),
            ])?,
            box_color: WeightedTable::new([
                (0.45, GOLD_ROSE),
                (0.10, RED_VELVET),
                (0.45, GREEN_RICH),
            ])?,
            sphere_color: WeightedTable::new([
                (0.45, GOLD_METALLIC),
                (0.10, RED_BRIGHT),
                (0.45, GREEN_RICH),
            ])?,
            light_color: WeightedTable::new([(0.2, GOLD_METALLIC), (0.8, WHITE_WARM)])?,
        })
    }

    /// Draw a palette entry for an ornament of the given kind.
    pub fn color_for<R: Rng>(&self, kind: OrnamentKind, rng: &mut R) -> u32 {
        let table = match kind {
            OrnamentKind::Box => &self.box_color,
            OrnamentKind::Sphere => &self.sphere_color,
            OrnamentKind::Light => &self.light_color,
        };
        *table.pick(rng)
    }
}

/// Ornaments partitioned by kind; each kind renders as one instanced batch.
#[derive(Clone, Debug, Default)]
pub struct OrnamentSets {
    pub boxes: Vec<OrnamentSeed>,
    pub spheres: Vec<OrnamentSeed>,
    pub lights: Vec<OrnamentSeed>,
}

impl OrnamentSets {
    pub fn total(&self) -> usize {
        self.boxes.len() + self.spheres.len() + self.lights.len()
    }
}

pub fn generate_foliage<R: Rng>(rng: &mut R, params: &SceneParams) -> Vec<FoliageSeed> {
    let mut seeds = Vec::with_capacity(params.foliage_count);
    for _ in 0..params.foliage_count {
        let scatter_pos = sample_in_sphere(rng, params.scatter_radius);
        let tree_pos = sample_on_cone(rng, params.tree_height, params.tree_radius_bottom);
        seeds.push(FoliageSeed {
            scatter_pos,
            tree_pos,
            random: rng.gen::<f32>(),
            size: 0.3 + rng.gen::<f32>() * 0.8,
        });
    }
    seeds
}

pub fn generate_ornaments<R: Rng>(
    rng: &mut R,
    params: &SceneParams,
    tables: &OrnamentTables,
) -> OrnamentSets {
    let mut sets = OrnamentSets::default();
    for _ in 0..params.ornament_count {
        let kind = *tables.kind.pick(rng);
        let mut tree_pos = sample_on_cone(rng, params.tree_height, params.tree_radius_bottom);
        // Keep ornaments just outside the foliage silhouette
        tree_pos.x *= ORNAMENT_PUSH_OUT;
        tree_pos.z *= ORNAMENT_PUSH_OUT;
        let scatter_pos = sample_in_sphere(rng, params.scatter_radius);
        let color = hex_to_vec3(tables.color_for(kind, rng));
        let seed = OrnamentSeed {
            scatter_pos,
            tree_pos,
            rotation: Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0),
            scale: 0.3 + rng.gen::<f32>() * 0.5,
            kind,
            color,
            random: rng.gen::<f32>(),
        };
        match kind {
            OrnamentKind::Box => sets.boxes.push(seed),
            OrnamentKind::Sphere => sets.spheres.push(seed),
            OrnamentKind::Light => sets.lights.push(seed),
        }
    }
    sets
}

pub fn generate_emblem<R: Rng>(rng: &mut R, params: &SceneParams) -> EmblemSeed {
    EmblemSeed {
        scatter_pos: sample_in_sphere(rng, params.scatter_radius),
        tree_pos: Vec3::new(
            0.0,
            params.tree_height / 2.0 + EMBLEM_APEX_OFFSET,
            0.0,
        ),
    }
}
