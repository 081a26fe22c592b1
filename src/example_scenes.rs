use crate::material::Material;
use crate::object::SimpleObject;
use crate::scene::{PointLight, Scene};
use crate::shape::Sphere;
use crate::*;

fn glossy(center: P3, radius: f64, ambient: RGB, diffuse: RGB) -> Result<SimpleObject> {
    Ok(SimpleObject {
        shape: Sphere::new(center, radius)?,
        material: Material::new(ambient, diffuse, RGB::all(1.0), 100.0, 0.5)?,
    })
}

/// A red ball, a small purple ball in front of it, and a huge grey sphere
/// acting as the floor, lit by a white light up and to the right.
pub fn three_spheres(camera: P3) -> Result<Scene> {
    let objects = vec![
        glossy(
            P3::new(-0.2, 0.0, -1.0),
            0.7,
            RGB::new(0.1, 0.0, 0.0),
            RGB::new(0.7, 0.0, 0.0),
        )?,
        glossy(
            P3::new(0.1, -0.3, 0.0),
            0.1,
            RGB::new(0.1, 0.0, 0.1),
            RGB::new(0.7, 0.0, 0.7),
        )?,
        glossy(
            P3::new(0.0, -9000.0, 0.0),
            9000.0 - 0.7,
            RGB::all(0.1),
            RGB::all(0.6),
        )?,
    ];
    let light = PointLight::white(P3::new(5.0, 5.0, 5.0))?;
    Ok(Scene::new(objects, light, camera))
}

pub fn default_camera() -> P3 {
    P3::new(0.0, 0.0, 1.0)
}
