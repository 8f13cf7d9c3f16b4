use nalgebra::Point3;

/// The position of a single atom, as read from one coordinate record.
///
/// Coordinates are stored in the units of the source file (Angstroms for PDB)
/// and never change after parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomCoordinate {
    position: Point3<f64>,
}

impl AtomCoordinate {
    /// Creates a coordinate from its three axis values.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Returns the coordinate as a point for use in vector arithmetic.
    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }
}

impl From<Point3<f64>> for AtomCoordinate {
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

impl From<[f64; 3]> for AtomCoordinate {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
