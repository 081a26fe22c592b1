use std::ops::{Add, AddAssign, Mul};
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGB {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }
    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    pub fn has_nan(&self) -> bool {
        self.channels().iter().any(|c| c.is_nan())
    }

    pub fn is_non_negative(&self) -> bool {
        self.channels().iter().all(|c| *c >= 0.0)
    }

    pub fn clamp01(&self) -> Self {
        RGB {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp01();
        [c.r, c.g, c.b].map(|x| (x * 255.0).round() as u8)
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f64> for RGB {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}
