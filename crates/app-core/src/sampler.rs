use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform-volume random point inside a sphere of the given radius.
///
/// The radial coordinate takes the cube root of a uniform draw so density is
/// uniform per unit volume; the polar angle goes through an inverse cosine so
/// directions are uniform on the sphere. A naive uniform radius would pile
/// samples up near the center.
pub fn sample_in_sphere<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Random point on a tapered cone, vertically centered on the origin.
///
/// Height is uniform in [0, height). The radius available at that height
/// follows an exponential taper, `bottom_radius * (1 - h)^0.9`, and the
/// radial draw inside that disc is biased toward the rim (`u^0.4`) so the
/// samples read as branch tips rather than volume fill.
pub fn sample_on_cone<R: Rng>(rng: &mut R, height: f32, bottom_radius: f32) -> Vec3 {
    let y = rng.gen::<f32>() * height;
    let percent_up = y / height;
    let r_at_height = bottom_radius * (1.0 - percent_up).powf(0.9);
    let theta = TAU * rng.gen::<f32>();
    let r = r_at_height * rng.gen::<f32>().powf(0.4);
    Vec3::new(r * theta.cos(), y - height / 2.0, r * theta.sin())
}
