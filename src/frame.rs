use crate::error::{Error, Result};
use crate::Vec3;
use cgmath::prelude::*;

/// Tolerance for the orthonormality check of a `BasisFrame`.
const ORTHONORMAL_EPSILON: f64 = 1e-9;

/// Local surface frame the hemisphere is built on.
///
/// Sampled directions are expressed as a linear combination of the two
/// tangents and the normal, so the hemisphere always opens towards `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisFrame {
    tangent1: Vec3,
    tangent2: Vec3,
    normal: Vec3,
}

impl BasisFrame {
    /// Creates a frame from three vectors that must be mutually orthogonal unit vectors.
    pub fn new(tangent1: Vec3, tangent2: Vec3, normal: Vec3) -> Result<Self> {
        let frame = BasisFrame {
            tangent1,
            tangent2,
            normal,
        };

        if frame.is_orthonormal() {
            Ok(frame)
        } else {
            Err(Error::NonOrthonormalBasis)
        }
    }

    /// The frame spanned by the x, y and z axes, opening towards +z.
    pub fn standard() -> Self {
        BasisFrame {
            tangent1: Vec3::unit_x(),
            tangent2: Vec3::unit_y(),
            normal: Vec3::unit_z(),
        }
    }

    pub fn tangent1(&self) -> Vec3 {
        self.tangent1
    }

    pub fn tangent2(&self) -> Vec3 {
        self.tangent2
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Maps local coordinates `(a, b, c)` to `a * tangent1 + b * tangent2 + c * normal`.
    pub fn to_world(&self, a: f64, b: f64, c: f64) -> Vec3 {
        a * self.tangent1 + b * self.tangent2 + c * self.normal
    }

    pub fn is_orthonormal(&self) -> bool {
        let unit = |v: Vec3| (v.magnitude() - 1.0).abs() <= ORTHONORMAL_EPSILON;
        let orthogonal = |a: Vec3, b: Vec3| a.dot(b).abs() <= ORTHONORMAL_EPSILON;

        unit(self.tangent1)
            && unit(self.tangent2)
            && unit(self.normal)
            && orthogonal(self.tangent1, self.tangent2)
            && orthogonal(self.tangent1, self.normal)
            && orthogonal(self.tangent2, self.normal)
    }
}

impl Default for BasisFrame {
    fn default() -> Self {
        BasisFrame::standard()
    }
}

/// A hemisphere of radius 1, with the bottom disk aligned to a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitHemisphere {
    PosX, NegX,
    PosY, NegY,
    PosZ, NegZ
}

impl UnitHemisphere {
    /// Right-handed frame with the normal pointing along the named axis.
    pub fn frame(&self) -> BasisFrame {
        let (x, y, z) = (Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z());

        let (tangent1, tangent2, normal) = match self {
            &UnitHemisphere::PosX => (y, z, x),
            &UnitHemisphere::NegX => (z, y, -x),
            &UnitHemisphere::PosY => (z, x, y),
            &UnitHemisphere::NegY => (x, z, -y),
            &UnitHemisphere::PosZ => (x, y, z),
            &UnitHemisphere::NegZ => (y, x, -z),
        };

        BasisFrame { tangent1, tangent2, normal }
    }
}

impl From<UnitHemisphere> for BasisFrame {
    fn from(hemisphere: UnitHemisphere) -> Self {
        hemisphere.frame()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL: [UnitHemisphere; 6] = [
        UnitHemisphere::PosX, UnitHemisphere::NegX,
        UnitHemisphere::PosY, UnitHemisphere::NegY,
        UnitHemisphere::PosZ, UnitHemisphere::NegZ,
    ];

    #[test]
    fn test_standard_frame_is_orthonormal() {
        assert!(BasisFrame::standard().is_orthonormal());
        assert_eq!(BasisFrame::standard(), BasisFrame::default());
    }

    #[test]
    fn test_hemisphere_frames_are_right_handed() {
        for hemisphere in ALL.iter() {
            let frame = hemisphere.frame();
            assert!(frame.is_orthonormal(), "{:?} not orthonormal", hemisphere);
            let cross = frame.tangent1().cross(frame.tangent2());
            assert_ulps_eq!(cross.x, frame.normal().x);
            assert_ulps_eq!(cross.y, frame.normal().y);
            assert_ulps_eq!(cross.z, frame.normal().z);
        }
    }

    #[test]
    fn test_hemisphere_normals() {
        assert_eq!(Vec3::unit_x(), UnitHemisphere::PosX.frame().normal());
        assert_eq!(-Vec3::unit_y(), UnitHemisphere::NegY.frame().normal());
        assert_eq!(-Vec3::unit_z(), BasisFrame::from(UnitHemisphere::NegZ).normal());
    }

    #[test]
    fn test_reject_non_orthonormal() {
        let skewed = BasisFrame::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(Err(Error::NonOrthonormalBasis), skewed);

        let scaled = BasisFrame::new(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(Err(Error::NonOrthonormalBasis), scaled);
    }

    #[test]
    fn test_to_world() {
        let frame = UnitHemisphere::PosX.frame();
        let v = frame.to_world(0.0, 0.0, 1.0);
        assert_eq!(Vec3::unit_x(), v);
    }
}
