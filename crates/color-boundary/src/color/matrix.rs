//! Fixed 3×3 conversion matrices and small vector helpers
//!
//! Two matrix pairs are constants: linear sRGB ↔ XYZ (D65, Lindbloom) and
//! linear sRGB → linear Display P3. Everything else is derived by
//! composition exactly once, on first use, and is read-only afterwards.

use std::sync::LazyLock;

/// Row-major 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Multiply a column vector.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Matrix product `self · rhs`: the result applies `rhs` first.
    pub fn compose(&self, rhs: &Mat3) -> Mat3 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Mat3(out)
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate. Returns `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Mat3> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let m = &self.0;
        let inv_det = 1.0 / det;
        Some(Mat3([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }
}

/// Linear sRGB → XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ → linear sRGB (D65).
pub const XYZ_TO_SRGB: Mat3 = Mat3([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Linear sRGB → linear Display P3.
pub const SRGB_TO_DISPLAY_P3: Mat3 = Mat3([
    [0.8225, 0.1774, 0.0000],
    [0.0332, 0.9669, 0.0000],
    [0.0171, 0.0724, 0.9108],
]);

/// Linear Display P3 → linear sRGB, the exact inverse of [`SRGB_TO_DISPLAY_P3`].
pub static DISPLAY_P3_TO_SRGB: LazyLock<Mat3> = LazyLock::new(|| {
    SRGB_TO_DISPLAY_P3
        .inverse()
        .expect("sRGB to Display P3 matrix is non-singular")
});

/// Linear Display P3 → XYZ.
pub static DISPLAY_P3_TO_XYZ: LazyLock<Mat3> =
    LazyLock::new(|| SRGB_TO_XYZ.compose(&DISPLAY_P3_TO_SRGB));

/// XYZ → linear Display P3.
pub static XYZ_TO_DISPLAY_P3: LazyLock<Mat3> =
    LazyLock::new(|| SRGB_TO_DISPLAY_P3.compose(&XYZ_TO_SRGB));

// Vector helpers over plain triples. Components are compared as points in
// whatever space the caller has converted them to.

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn length(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    length(sub(a, b))
}

/// Unit vector in the direction of `a`; the zero vector stays zero.
#[inline]
pub fn normalize(a: [f64; 3]) -> [f64; 3] {
    let len = length(a);
    if len > 0.0 {
        scale(a, 1.0 / len)
    } else {
        [0.0; 3]
    }
}

#[inline]
pub fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    scale(add(a, b), 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_identity(m: &Mat3, tolerance: f64) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = Mat3::IDENTITY.0[i][j];
                assert!(
                    (m.0[i][j] - expected).abs() < tolerance,
                    "element [{i}][{j}] = {} (expected {expected})",
                    m.0[i][j]
                );
            }
        }
    }

    #[test]
    fn test_srgb_xyz_pair_is_inverse() {
        assert_near_identity(&XYZ_TO_SRGB.compose(&SRGB_TO_XYZ), 1e-6);
    }

    #[test]
    fn test_derived_p3_inverse() {
        assert_near_identity(&DISPLAY_P3_TO_SRGB.compose(&SRGB_TO_DISPLAY_P3), 1e-12);
    }

    #[test]
    fn test_p3_composites_are_inverse() {
        assert_near_identity(&XYZ_TO_DISPLAY_P3.compose(&DISPLAY_P3_TO_XYZ), 1e-5);
    }

    #[test]
    fn test_white_maps_to_d65() {
        let xyz = SRGB_TO_XYZ.apply([1.0, 1.0, 1.0]);
        assert!((xyz[0] - 0.95047).abs() < 1e-4);
        assert!((xyz[1] - 1.0).abs() < 1e-4);
        assert!((xyz[2] - 1.08883).abs() < 1e-4);
    }

    #[test]
    fn test_identity_leaves_vectors_alone() {
        let v = [0.25, -0.5, 2.0];
        assert_eq!(Mat3::IDENTITY.apply(v), v);
        assert_near_identity(&SRGB_TO_XYZ.compose(&Mat3::IDENTITY).compose(&XYZ_TO_SRGB), 1e-6);
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        let m = Mat3([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_vector_helpers() {
        assert_eq!(sub([1.0, 2.0, 3.0], [1.0, 1.0, 1.0]), [0.0, 1.0, 2.0]);
        assert_eq!(length([3.0, 4.0, 0.0]), 5.0);
        assert_eq!(normalize([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(normalize([0.0, 2.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_eq!(midpoint([0.0, 0.0, 0.0], [2.0, 4.0, 6.0]), [1.0, 2.0, 3.0]);
        assert_eq!(distance([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]), 0.0);
    }
}
