use crate::*;

/// Returns `v / |v|`, or `Error::DegenerateVector` when `v` has no direction.
pub fn normalize(v: &V3) -> Result<V3> {
    if !v.iter().all(|x| x.is_finite()) {
        return Err(Error::DegenerateVector);
    }
    // scale first so huge components do not overflow the norm
    let scale = v.amax();
    if scale == 0.0 {
        return Err(Error::DegenerateVector);
    }
    let v = v / scale;
    Ok(&v / v.norm())
}

/// Mirror `v` about the plane orthogonal to the unit vector `n`.
pub fn reflect(v: &V3, n: &V3) -> V3 {
    v - 2.0 * v.dot(n) * n
}

/// `i`-th of `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize, i: usize) -> f64 {
    if n <= 1 {
        start
    } else {
        start + (end - start) * i as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn close(a: &V3, b: &V3) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn normalize_zero_is_error() {
        assert!(matches!(
            normalize(&V3::zeros()),
            Err(Error::DegenerateVector)
        ));
        assert!(normalize(&V3::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(normalize(&V3::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn normalize_huge_and_tiny() {
        let n = normalize(&V3::new(1e200, 0.0, -1e200)).unwrap();
        let expected = V3::new(1.0, 0.0, -1.0) / 2f64.sqrt();
        assert!(close(&n, &expected));
        let n = normalize(&V3::new(0.0, 3e-200, 0.0)).unwrap();
        assert!(close(&n, &V3::y()));
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = V3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let n = normalize(&v).unwrap();
            assert!((n.norm() - 1.0).abs() < 1e-12);
            assert!(close(&normalize(&n).unwrap(), &n));
        }
    }

    #[test]
    fn reflect_flips_normal_component() {
        let r = reflect(&V3::new(1.0, 0.0, -1.0), &V3::z());
        assert!(close(&r, &V3::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn reflect_preserves_length() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = V3::new(rng.gen(), rng.gen(), rng.gen());
            let n = normalize(&V3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                1.0,
            ))
            .unwrap();
            assert!((reflect(&v, &n).norm() - v.norm()).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(-1.0, 1.0, 5, 0), -1.0);
        assert_eq!(linspace(-1.0, 1.0, 5, 4), 1.0);
        assert_eq!(linspace(-1.0, 1.0, 5, 2), 0.0);
        assert_eq!(linspace(2.0, -2.0, 1, 0), 2.0);
    }
}
