use crate::*;

/// Phong-Blinn surface coefficients plus the mirror reflection fraction.
#[derive(Clone, Debug)]
pub struct Material {
    ambient: RGB,
    diffuse: RGB,
    specular: RGB,
    shininess: f64,
    reflection: f64,
}

impl Material {
    pub fn new(
        ambient: RGB,
        diffuse: RGB,
        specular: RGB,
        shininess: f64,
        reflection: f64,
    ) -> Result<Self> {
        for (name, c) in [
            ("ambient", &ambient),
            ("diffuse", &diffuse),
            ("specular", &specular),
        ] {
            if !(c.is_finite() && c.is_non_negative()) {
                return Err(Error::InvalidPrimitive(format!(
                    "{} coefficient {:?} must be finite and non-negative",
                    name, c
                )));
            }
        }
        if !(shininess > 0.0 && shininess.is_finite()) {
            return Err(Error::InvalidPrimitive(format!(
                "shininess must be positive, got {}",
                shininess
            )));
        }
        if !(0.0..=1.0).contains(&reflection) {
            return Err(Error::InvalidPrimitive(format!(
                "reflection must be in [0, 1], got {}",
                reflection
            )));
        }
        Ok(Material {
            ambient,
            diffuse,
            specular,
            shininess,
            reflection,
        })
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
    pub fn shininess(&self) -> f64 {
        self.shininess
    }
    pub fn reflection(&self) -> f64 {
        self.reflection
    }
}
