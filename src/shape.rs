use crate::*;

/// Distance along the ray to the nearer of the two crossings of the sphere,
/// or `None` if the ray misses, only grazes it, or either crossing is not in
/// front of the origin. `dir` must be unit length.
pub fn sphere_intersect(center: &P3, radius: f64, origin: &P3, dir: &V3) -> Option<f64> {
    let rel = origin - center;
    let b = 2.0 * dir.dot(&rel);
    let c = rel.norm_squared() - radius * radius;
    let delta = b * b - 4.0 * c;
    if delta <= 0.0 {
        return None;
    }
    let sq = delta.sqrt();
    let t1 = (-b + sq) / 2.0;
    let t2 = (-b - sq) / 2.0;
    if t1 > 0.0 && t2 > 0.0 {
        Some(t1.min(t2))
    } else {
        None
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    center: P3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: P3, radius: f64) -> Result<Self> {
        if !center.coords.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidPrimitive(format!(
                "sphere center {:?} is not finite",
                center
            )));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Error::InvalidPrimitive(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        Ok(Sphere { center, radius })
    }

    pub fn center(&self) -> &P3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<f64> {
        sphere_intersect(&self.center, self.radius, &ray.origin, &ray.dir)
    }

    /// Outward unit normal at `pos`, which is expected to lie on the surface.
    pub fn normal_at(&self, pos: &P3) -> Result<V3> {
        math::normalize(&(pos - self.center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit() {
        for r in [0.5, 1.0, 2.5, 4.9] {
            let s = Sphere::new(P3::origin(), r).unwrap();
            let ray = Ray::new(P3::new(0.0, 0.0, 5.0), -V3::z());
            let t = s.test_hit(&ray).unwrap();
            assert!((t - (5.0 - r)).abs() < 1e-12);
        }
    }

    #[test]
    fn miss_when_offset_exceeds_radius() {
        let s = Sphere::new(P3::origin(), 1.0).unwrap();
        let ray = Ray::new(P3::new(1.5, 0.0, 5.0), -V3::z());
        assert_eq!(s.test_hit(&ray), None);
    }

    #[test]
    fn tangent_is_a_miss() {
        let s = Sphere::new(P3::origin(), 1.0).unwrap();
        let ray = Ray::new(P3::new(1.0, 0.0, 5.0), -V3::z());
        assert_eq!(s.test_hit(&ray), None);
    }

    #[test]
    fn behind_or_inside_is_a_miss() {
        let s = Sphere::new(P3::origin(), 1.0).unwrap();
        let behind = Ray::new(P3::new(0.0, 0.0, 5.0), V3::z());
        assert_eq!(s.test_hit(&behind), None);
        let inside = Ray::new(P3::origin(), V3::z());
        assert_eq!(s.test_hit(&inside), None);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(Sphere::new(P3::origin(), 0.0).is_err());
        assert!(Sphere::new(P3::origin(), -1.0).is_err());
        assert!(Sphere::new(P3::origin(), f64::NAN).is_err());
    }
}
