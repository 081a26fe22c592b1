use super::*;
use crate::object::ObjectHit;

/// Offset along the surface normal for rays leaving a surface, so they do not
/// hit the surface they start from.
pub const SHADOW_BIAS: f64 = 1e-5;

#[derive(Clone, Debug)]
pub enum Shading {
    Occluded,
    Lit {
        illumination: RGB,
        /// Biased hit point, origin of the next bounce.
        shifted: P3,
        normal: V3,
    },
}

/// Phong-Blinn terms for one surface point. `to_light`, `to_camera` and
/// `normal` must be unit length.
pub fn phong_blinn(
    material: &Material,
    light: &PointLight,
    normal: &V3,
    to_light: &V3,
    to_camera: &V3,
) -> RGB {
    let ambient = material.ambient() * light.ambient();

    let lambert = to_light.dot(normal).max(0.0);
    let diffuse = material.diffuse() * light.diffuse() * lambert;

    // light straight behind the point as seen from the camera: no half vector
    let half = (to_light + to_camera)
        .try_normalize(0.0)
        .unwrap_or_else(V3::zeros);
    let highlight = normal.dot(&half).max(0.0).powf(material.shininess() / 4.0);
    let specular = material.specular() * light.specular() * highlight;

    ambient + diffuse + specular
}

pub fn shade(scene: &Scene, ray: &Ray, hit: &ObjectHit) -> Result<Shading> {
    let object = hit.object;
    let light = scene.light();

    let intersection = ray.at(hit.dist);
    let normal = object.shape.normal_at(&intersection)?;
    let shifted = intersection + SHADOW_BIAS * normal;

    let to_light = math::normalize(&(light.position() - shifted))?;
    let light_dist = (light.position() - intersection).norm();
    let blocker_dist = scene.objects().nearest_dist(&Ray::new(shifted, to_light));
    if blocker_dist < light_dist {
        return Ok(Shading::Occluded);
    }

    let to_camera = math::normalize(&(scene.camera() - intersection))?;
    let illumination = phong_blinn(&object.material, light, &normal, &to_light, &to_camera);
    Ok(Shading::Lit {
        illumination,
        shifted,
        normal,
    })
}
