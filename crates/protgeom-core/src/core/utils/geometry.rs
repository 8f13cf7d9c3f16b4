use crate::core::models::collection::AtomCollection;
use nalgebra::{Point3, Vector3};

/// Sum of per-axis squared differences between two points.
pub fn squared_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm_squared()
}

/// Arithmetic mean of every axis over all atoms in the collection.
pub fn center_of_gravity(atoms: &AtomCollection) -> Point3<f64> {
    let sum: Vector3<f64> = atoms.iter().map(|atom| atom.position().coords).sum();
    Point3::from(sum / atoms.len() as f64)
}

/// Root-mean-square distance of the atoms from `center`.
pub fn radius_of_gyration(atoms: &AtomCollection, center: &Point3<f64>) -> f64 {
    let squared_sum: f64 = atoms
        .iter()
        .map(|atom| squared_distance(atom.position(), center))
        .sum();
    (squared_sum / atoms.len() as f64).sqrt()
}

/// Largest Euclidean distance between any two atoms of the collection.
///
/// Every unordered pair `(i, j)` with `i < j` is visited once. A collection
/// holding a single atom has no pairs and yields `0.0`.
pub fn max_pairwise_distance(atoms: &AtomCollection) -> f64 {
    let atoms = atoms.as_slice();
    let mut max_squared = 0.0_f64;

    for (i, first) in atoms.iter().enumerate() {
        for second in &atoms[i + 1..] {
            let d2 = squared_distance(first.position(), second.position());
            if d2 > max_squared {
                max_squared = d2;
            }
        }
    }

    max_squared.sqrt()
}
