use crate::*;

/// Pin-hole camera looking down -z through a screen rectangle on the z = 0
/// plane. The rectangle spans x in [-1, 1] and y in [-1/ratio, 1/ratio]
/// where `ratio = height / width`.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: P3,
    width: usize,
    height: usize,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Camera {
    pub fn new(origin: P3, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let ratio = height as f64 / width as f64;
        Ok(Camera {
            origin,
            width,
            height,
            left: -1.0,
            top: 1.0 / ratio,
            right: 1.0,
            bottom: -1.0 / ratio,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(left, top, right, bottom)`
    pub fn screen(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// Point on the screen plane that pixel `(row, col)` samples.
    pub fn target(&self, row: usize, col: usize) -> P3 {
        let x = math::linspace(self.left, self.right, self.width, col);
        let y = math::linspace(self.top, self.bottom, self.height, row);
        P3::new(x, y, 0.0)
    }

    pub fn ray_to(&self, row: usize, col: usize) -> Result<Ray> {
        let dir = math::normalize(&(self.target(row, col) - self.origin))?;
        Ok(Ray::new(self.origin, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_screen_corners() {
        let cam = Camera::new(P3::new(0.0, 0.0, 1.0), 4, 2).unwrap();
        let (l, t, r, b) = cam.screen();
        assert_eq!((l, t, r, b), (-1.0, 2.0, 1.0, -2.0));
        assert_eq!(cam.target(0, 0), P3::new(-1.0, 2.0, 0.0));
        assert_eq!(cam.target(1, 3), P3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn center_ray_points_down_z() {
        let cam = Camera::new(P3::new(0.0, 0.0, 1.0), 3, 3).unwrap();
        let ray = cam.ray_to(1, 1).unwrap();
        assert_eq!(ray.origin, P3::new(0.0, 0.0, 1.0));
        assert!((ray.dir - (-V3::z())).norm() < 1e-12);
    }

    #[test]
    fn rays_are_unit_length() {
        let cam = Camera::new(P3::new(0.3, -0.2, 2.0), 7, 5).unwrap();
        for row in 0..5 {
            for col in 0..7 {
                let ray = cam.ray_to(row, col).unwrap();
                assert!((ray.dir.norm() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn single_pixel_uses_top_left() {
        let cam = Camera::new(P3::new(0.0, 0.0, 1.0), 1, 1).unwrap();
        assert_eq!(cam.target(0, 0), P3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn camera_on_screen_point_is_degenerate() {
        let cam = Camera::new(P3::new(-1.0, 1.0, 0.0), 2, 2).unwrap();
        assert!(matches!(cam.ray_to(0, 0), Err(Error::DegenerateVector)));
    }

    #[test]
    fn rejects_empty_image() {
        assert!(Camera::new(P3::origin(), 0, 10).is_err());
    }
}
