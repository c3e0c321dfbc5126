use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Path of child indices that identifies a node from its group root.
///
/// The first index selects the group (a section of the flattened list). A
/// coordinate of length one denotes the group itself; every further index
/// descends one level into the group's tree.
///
/// Coordinates order lexicographically, and a coordinate orders before all
/// of its descendants. Flat row order within a group is exactly this order
/// restricted to visible nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    indices: Vec<usize>,
}

#[allow(clippy::len_without_is_empty)]
impl Coordinate {
    /// Coordinate of a group root.
    pub fn group_root(group: usize) -> Self {
        Self {
            indices: vec![group],
        }
    }

    /// Coordinate of the node reached from `group` by descending `path`.
    pub fn new(group: usize, path: &[usize]) -> Self {
        let mut indices = Vec::with_capacity(path.len() + 1);
        indices.push(group);
        indices.extend_from_slice(path);
        Self { indices }
    }

    /// Number of indices, group included. Never zero.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Nesting depth below the group root (`0` for the group itself).
    pub fn depth(&self) -> usize {
        self.indices.len() - 1
    }

    /// Index of the group this coordinate belongs to.
    pub fn group(&self) -> usize {
        self.indices[0]
    }

    /// Whether this coordinate is a group root.
    pub fn is_group(&self) -> bool {
        self.indices.len() == 1
    }

    /// Last index, i.e. the position of this node among its siblings.
    pub fn last(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Coordinate of the enclosing node, `None` for a group root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_group() {
            return None;
        }

        let mut indices = self.indices.clone();
        indices.pop();
        Some(Self { indices })
    }

    /// Coordinate of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);
        Self { indices }
    }

    /// Whether `other` lies strictly below this coordinate.
    pub fn is_ancestor_of(&self, other: &Coordinate) -> bool {
        other.indices.len() > self.indices.len()
            && other.indices.starts_with(&self.indices)
    }

    /// Proper ancestors from the group root down to the parent.
    pub fn ancestors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (1..self.indices.len()).map(|len| Coordinate {
            indices: self.indices[..len].to_vec(),
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.indices {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Coordinate {
    type Error = TreeError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        if indices.is_empty() {
            return Err(TreeError::EmptyCoordinate);
        }
        Ok(Self { indices })
    }
}

impl TryFrom<&[usize]> for Coordinate {
    type Error = TreeError;

    fn try_from(indices: &[usize]) -> Result<Self, Self::Error> {
        Self::try_from(indices.to_vec())
    }
}

impl FromStr for Coordinate {
    type Err = TreeError;

    /// Parse the dotted form produced by [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TreeError::EmptyCoordinate);
        }

        let indices = trimmed
            .split('.')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    TreeError::InvalidComponent(part.trim().to_owned())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(indices)
    }
}
