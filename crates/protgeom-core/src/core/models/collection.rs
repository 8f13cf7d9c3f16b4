use super::atom::AtomCoordinate;
use std::ops::Index;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CollectionError {
    #[error("An atom collection must contain at least one atom")]
    Empty,
}

/// The ordered, non-empty set of atoms read from one structure file.
///
/// Atoms keep the order of their records in the source file. A collection is
/// created fresh for every file and has no capacity limit.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomCollection {
    atoms: Vec<AtomCoordinate>,
}

impl AtomCollection {
    /// Wraps a list of atoms, rejecting an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if `atoms` has no elements.
    pub fn new(atoms: Vec<AtomCoordinate>) -> Result<Self, CollectionError> {
        if atoms.is_empty() {
            return Err(CollectionError::Empty);
        }
        Ok(Self { atoms })
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Always `false`; present for API symmetry with standard collections.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AtomCoordinate> {
        self.atoms.iter()
    }

    pub fn as_slice(&self) -> &[AtomCoordinate] {
        &self.atoms
    }

    pub fn into_inner(self) -> Vec<AtomCoordinate> {
        self.atoms
    }
}

impl TryFrom<Vec<AtomCoordinate>> for AtomCollection {
    type Error = CollectionError;

    fn try_from(atoms: Vec<AtomCoordinate>) -> Result<Self, Self::Error> {
        Self::new(atoms)
    }
}

impl Index<usize> for AtomCollection {
    type Output = AtomCoordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl<'a> IntoIterator for &'a AtomCollection {
    type Item = &'a AtomCoordinate;
    type IntoIter = std::slice::Iter<'a, AtomCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
