use std::f64::consts::PI;

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix (the bottom row [0, 0, 1] is implicit):
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// Points are column vectors: `p' = M * p`. Angles in the public API are
/// degrees, matching the SVG `rotate` attribute this crate exists to serve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// A pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A non-uniform scale about the origin.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation about the origin, in degrees.
    pub fn rotation_deg(angle_deg: f64) -> Self {
        let t = angle_deg * PI / 180.0;
        let (sin, cos) = t.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A rotation about the point `(cx, cy)`, in degrees.
    pub fn rotation_about(cx: f64, cy: f64, angle_deg: f64) -> Self {
        let mut m = Self::identity();
        m.translate_self(cx, cy)
            .rotate_self(angle_deg)
            .translate_self(-cx, -cy);
        m
    }

    /// A horizontal skew by `angle_deg` degrees.
    pub fn skew_x_deg(angle_deg: f64) -> Self {
        Self::new(1.0, 0.0, (angle_deg * PI / 180.0).tan(), 1.0, 0.0, 0.0)
    }

    /// A vertical skew by `angle_deg` degrees.
    pub fn skew_y_deg(angle_deg: f64) -> Self {
        Self::new(1.0, (angle_deg * PI / 180.0).tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Matrix product `self * other`: applies `other` first, then `self`.
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Sequential composition: the result applies `self` first, then
    /// `other`, so that
    /// `a.multiply(&b).transform_point(p) == b.transform_point(a.transform_point(p))`.
    pub fn multiply(&self, other: &Self) -> Self {
        other.then(self)
    }

    /// Post-multiplies `other` on the current matrix (DOMMatrix
    /// `multiplySelf`): in a builder chain, later calls apply earlier to the
    /// point.
    pub fn multiply_self(&mut self, other: &Self) -> &mut Self {
        *self = self.then(other);
        self
    }

    /// Post-multiplies a translation.
    pub fn translate_self(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.multiply_self(&Self::translation(tx, ty))
    }

    /// Post-multiplies a rotation about the origin, in degrees.
    pub fn rotate_self(&mut self, angle_deg: f64) -> &mut Self {
        self.multiply_self(&Self::rotation_deg(angle_deg))
    }

    /// Post-multiplies a scale.
    pub fn scale_self(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.multiply_self(&Self::scaling(sx, sy))
    }

    /// Post-multiplies a horizontal skew, in degrees.
    pub fn skew_x_self(&mut self, angle_deg: f64) -> &mut Self {
        self.multiply_self(&Self::skew_x_deg(angle_deg))
    }

    /// Post-multiplies a vertical skew, in degrees.
    pub fn skew_y_self(&mut self, angle_deg: f64) -> &mut Self {
        self.multiply_self(&Self::skew_y_deg(angle_deg))
    }

    /// Resets to the identity.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Applies the transform to a point.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Applies only the linear part (ignores translation).
    pub fn transform_vector(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y, self.b * x + self.d * y)
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > f64::EPSILON
    }

    /// The inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= f64::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }

    pub fn is_identity(&self, eps: f64) -> bool {
        (self.a - 1.0).abs() < eps
            && self.b.abs() < eps
            && self.c.abs() < eps
            && (self.d - 1.0).abs() < eps
            && self.e.abs() < eps
            && self.f.abs() < eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn approx_point(p: (f64, f64), q: (f64, f64)) -> bool {
        approx_eq(p.0, q.0) && approx_eq(p.1, q.1)
    }

    #[test]
    fn identity_leaves_points_unchanged() {
        let m = Matrix::identity();
        assert_eq!(m.transform_point(12.0, -3.5), (12.0, -3.5));
        assert!(m.is_identity(EPSILON));
    }

    #[test]
    fn rotation_90_deg() {
        let m = Matrix::rotation_deg(90.0);
        assert!(approx_point(m.transform_point(1.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn multiply_is_sequential_application() {
        // multiply(A, B) applies A, then B.
        let a = Matrix::rotation_deg(90.0);
        let b = Matrix::translation(10.0, 0.0);
        let m = a.multiply(&b);
        let p = (1.0, 0.0);
        let direct = b.transform_point(a.transform_point(p.0, p.1).0, a.transform_point(p.0, p.1).1);
        assert!(approx_point(m.transform_point(p.0, p.1), direct));
        // Rotate (1,0) -> (0,1), then translate -> (10,1).
        assert!(approx_point(m.transform_point(1.0, 0.0), (10.0, 1.0)));
    }

    #[test]
    fn multiply_property_scale_then_skew() {
        let a = Matrix::scaling(2.0, 3.0);
        let b = Matrix::skew_x_deg(30.0);
        let m = a.multiply(&b);
        let (ix, iy) = a.transform_point(5.0, -7.0);
        assert!(approx_point(m.transform_point(5.0, -7.0), b.transform_point(ix, iy)));
    }

    #[test]
    fn builder_chain_matches_anchor_rotation() {
        // translate(cx,cy); rotate; translate(-cx,-cy) keeps the anchor fixed.
        let m = Matrix::rotation_about(10.0, 20.0, 37.0);
        assert!(approx_point(m.transform_point(10.0, 20.0), (10.0, 20.0)));
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix::translation(50.0, -20.0)
            .then(&Matrix::rotation_deg(33.0))
            .then(&Matrix::scaling(2.0, 0.5));
        let inv = m.inverse().unwrap();
        let back = inv.inverse().unwrap();
        assert!(approx_eq(back.a, m.a));
        assert!(approx_eq(back.b, m.b));
        assert!(approx_eq(back.c, m.c));
        assert!(approx_eq(back.d, m.d));
        assert!(approx_eq(back.e, m.e));
        assert!(approx_eq(back.f, m.f));
        assert!(m.then(&inv).is_identity(1e-9));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix::scaling(0.0, 1.0);
        assert!(!m.is_invertible());
        assert!(m.inverse().is_none());
    }

    #[test]
    fn clear_resets_to_identity() {
        let mut m = Matrix::rotation_deg(45.0);
        m.translate_self(3.0, 4.0);
        m.clear();
        assert!(m.is_identity(EPSILON));
    }
}
