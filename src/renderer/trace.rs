use super::shade::{shade, Shading};
use super::*;

/// Where a pixel's bounce sequence stands. `Miss`, `Occluded` and `Done`
/// are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bounce {
    Tracing(usize),
    Miss,
    Occluded,
    Done,
}

#[derive(Clone, Debug)]
pub struct Traced {
    /// Accumulated color before clamping.
    pub color: RGB,
    pub end: Bounce,
}

struct PathState {
    ray: Ray,
    color: RGB,
    attenuation: f64,
}

fn step(scene: &Scene, max_depth: usize, depth: usize, state: &mut PathState) -> Result<Bounce> {
    let hit = match scene.test_hit(&state.ray) {
        Some(hit) => hit,
        None => return Ok(Bounce::Miss),
    };
    match shade(scene, &state.ray, &hit)? {
        Shading::Occluded => Ok(Bounce::Occluded),
        Shading::Lit {
            illumination,
            shifted,
            normal,
        } => {
            state.color += illumination * state.attenuation;
            state.attenuation *= hit.object.material.reflection();
            state.ray = Ray::new(shifted, math::reflect(&state.ray.dir, &normal));
            if depth + 1 < max_depth {
                Ok(Bounce::Tracing(depth + 1))
            } else {
                Ok(Bounce::Done)
            }
        }
    }
}

/// Follows `ray` through up to `max_depth` mirror bounces.
pub fn trace(scene: &Scene, ray: &Ray, max_depth: usize) -> Result<Traced> {
    let mut state = PathState {
        ray: ray.clone(),
        color: RGB::black(),
        attenuation: 1.0,
    };
    let mut bounce = if max_depth == 0 {
        Bounce::Done
    } else {
        Bounce::Tracing(0)
    };
    while let Bounce::Tracing(depth) = bounce {
        bounce = step(scene, max_depth, depth, &mut state)?;
    }
    Ok(Traced {
        color: state.color,
        end: bounce,
    })
}

/// Final pixel color: the traced color clamped to [0, 1].
pub fn radiance(scene: &Scene, ray: &Ray, max_depth: usize) -> Result<RGB> {
    let traced = trace(scene, ray, max_depth)?;
    if traced.color.has_nan() {
        warn!("radiance is NaN {:?}", traced.color);
        return Ok(RGB::black());
    }
    Ok(traced.color.clamp01())
}
