use crate::*;

pub struct SimpleObject {
    pub shape: shape::Sphere,
    pub material: material::Material,
}

pub struct ObjectHit<'a> {
    pub object: &'a SimpleObject,
    pub dist: f64,
}

pub struct ObjectList {
    pub objects: Vec<SimpleObject>,
}

impl ObjectList {
    pub fn new() -> Self {
        ObjectList { objects: vec![] }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimpleObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest object in front of the ray. On equal distances the object that
    /// comes first in the list wins.
    pub fn nearest(&self, ray: &Ray) -> Option<ObjectHit<'_>> {
        let mut hit = None::<ObjectHit>;
        for o in self.objects.iter() {
            if let Some(dist) = o.shape.test_hit(ray) {
                if hit.as_ref().map_or(true, |h| dist < h.dist) {
                    hit = Some(ObjectHit { object: o, dist });
                }
            }
        }
        hit
    }

    /// Distance to the nearest object, `f64::INFINITY` on a miss.
    pub fn nearest_dist(&self, ray: &Ray) -> f64 {
        self.nearest(ray).map_or(f64::INFINITY, |h| h.dist)
    }
}

impl Default for ObjectList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<SimpleObject>> for ObjectList {
    fn from(objects: Vec<SimpleObject>) -> Self {
        ObjectList { objects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use material::Material;
    use shape::Sphere;

    fn ball(z: f64, radius: f64, r: f64) -> SimpleObject {
        SimpleObject {
            shape: Sphere::new(P3::new(0.0, 0.0, z), radius).unwrap(),
            material: Material::new(RGB::new(r, 0.0, 0.0), RGB::all(0.0), RGB::all(0.0), 1.0, 0.0)
                .unwrap(),
        }
    }

    #[test]
    fn picks_nearest() {
        let list = ObjectList::from(vec![ball(-10.0, 1.0, 0.1), ball(-3.0, 1.0, 0.2)]);
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), -V3::z());
        let hit = list.nearest(&ray).unwrap();
        assert!((hit.dist - 7.0).abs() < 1e-12);
        assert_eq!(hit.object.material.ambient().r, 0.2);
    }

    #[test]
    fn ties_go_to_first() {
        let list = ObjectList::from(vec![ball(-3.0, 1.0, 0.1), ball(-3.0, 1.0, 0.2)]);
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), -V3::z());
        let hit = list.nearest(&ray).unwrap();
        assert_eq!(hit.object.material.ambient().r, 0.1);
    }

    #[test]
    fn empty_list_misses() {
        let list = ObjectList::new();
        let ray = Ray::new(P3::origin(), V3::x());
        assert!(list.nearest(&ray).is_none());
        assert_eq!(list.nearest_dist(&ray), f64::INFINITY);
    }
}
