use crate::object::{ObjectList, SimpleObject};
use crate::*;

use log::*;

/// A point light; intensities are not attenuated with distance.
#[derive(Clone, Debug)]
pub struct PointLight {
    position: P3,
    ambient: RGB,
    diffuse: RGB,
    specular: RGB,
}

impl PointLight {
    pub fn new(position: P3, ambient: RGB, diffuse: RGB, specular: RGB) -> Result<Self> {
        if !position.coords.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidPrimitive(format!(
                "light position {:?} is not finite",
                position
            )));
        }
        for c in [&ambient, &diffuse, &specular] {
            if !(c.is_finite() && c.is_non_negative()) {
                return Err(Error::InvalidPrimitive(format!(
                    "light intensity {:?} must be finite and non-negative",
                    c
                )));
            }
        }
        Ok(PointLight {
            position,
            ambient,
            diffuse,
            specular,
        })
    }

    /// White light of unit intensity in every term.
    pub fn white(position: P3) -> Result<Self> {
        Self::new(position, RGB::all(1.0), RGB::all(1.0), RGB::all(1.0))
    }

    pub fn position(&self) -> &P3 {
        &self.position
    }
    pub fn ambient(&self) -> RGB {
        self.ambient
    }
    pub fn diffuse(&self) -> RGB {
        self.diffuse
    }
    pub fn specular(&self) -> RGB {
        self.specular
    }
}

pub struct Scene {
    objects: ObjectList,
    light: PointLight,
    camera: P3,
}

impl Scene {
    pub fn new(objects: Vec<SimpleObject>, light: PointLight, camera: P3) -> Self {
        debug!(
            "scene: {} spheres, light at {:?}, camera at {:?}",
            objects.len(),
            light.position,
            camera
        );
        Scene {
            objects: objects.into(),
            light,
            camera,
        }
    }

    pub fn objects(&self) -> &ObjectList {
        &self.objects
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn camera(&self) -> &P3 {
        &self.camera
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<object::ObjectHit<'_>> {
        self.objects.nearest(ray)
    }
}
