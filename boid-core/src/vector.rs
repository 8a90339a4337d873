use crate::math;

/// A 2D vector used for position, velocity and steering forces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Unit vector pointing at `angle` radians from the positive x axis.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = math::sin_cos(angle);
        Self { x: cos, y: sin }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.magnitude_squared())
    }

    /// Unit vector in the same direction, or the zero vector when `self` has
    /// no length.
    pub fn normalize(&self) -> Self {
        match self.magnitude() {
            len if len > 0.0 => *self / len,
            _ => Self::ZERO,
        }
    }

    /// Rescale to `max` only when the current magnitude exceeds it.
    pub fn limit(&self, max: f32) -> Self {
        if self.magnitude_squared() > max * max {
            self.with_magnitude(max)
        } else {
            *self
        }
    }

    /// Same direction, new length. Zero stays zero.
    pub fn with_magnitude(&self, magnitude: f32) -> Self {
        self.normalize() * magnitude
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }

    /// Angle of the vector in radians, in `(-PI, PI]`.
    pub fn heading(&self) -> f32 {
        math::atan2(self.y, self.x)
    }

    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = math::sin_cos(angle);
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<f32> for Vector2D {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl core::ops::DivAssign<f32> for Vector2D {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl core::iter::Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_normalize_keeps_direction() {
        let n = Vector2D::new(-6.0, 8.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < EPS);
        assert!((n.x + 0.6).abs() < EPS);
        assert!((n.y - 0.8).abs() < EPS);
    }

    #[test]
    fn test_with_magnitude() {
        let v = Vector2D::new(0.0, -0.5).with_magnitude(3.0);
        assert!((v.y + 3.0).abs() < EPS);
        assert!(v.x.abs() < EPS);
        assert_eq!(Vector2D::ZERO.with_magnitude(3.0), Vector2D::ZERO);
    }

    #[test]
    fn test_zero_and_finite_checks() {
        assert!(Vector2D::zero().is_zero());
        assert!(!Vector2D::new(0.0, 1e-9).is_zero());
        assert!(Vector2D::new(1.0, -1.0).is_finite());
        assert!(!Vector2D::new(f32::NAN, 0.0).is_finite());
        assert!(!Vector2D::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = Vector2D::zero().normalize();
        assert_eq!(n, Vector2D::zero());
        assert!(n.is_finite());
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));

        let mut acc = v1;
        acc += v2;
        acc -= v1;
        acc *= 2.0;
        acc /= 4.0;
        assert_eq!(acc, Vector2D::new(1.5, 2.0));
    }

    #[test]
    fn test_limit_only_shrinks() {
        let long = Vector2D::new(30.0, 40.0).limit(5.0);
        assert!((long.magnitude() - 5.0).abs() < EPS);
        assert!((long.x - 3.0).abs() < EPS);

        let short = Vector2D::new(0.3, 0.4);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_heading_and_rotate() {
        assert!((Vector2D::new(0.0, 2.0).heading() - FRAC_PI_2).abs() < EPS);
        assert!((Vector2D::new(-1.0, 0.0).heading() - PI).abs() < EPS);

        let r = Vector2D::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(r.x.abs() < EPS);
        assert!((r.y - 1.0).abs() < EPS);

        let u = Vector2D::from_angle(PI);
        assert!((u.x + 1.0).abs() < EPS);
        assert!(u.y.abs() < EPS);
    }

    #[test]
    fn test_sum() {
        let total: Vector2D = [Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 2.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Vector2D::new(1.0, 2.0));
    }
}
