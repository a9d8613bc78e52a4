use std::collections::hash_map;
use std::collections::HashMap;

use super::BlockPos;

/// Block identifier per world coordinate for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAssignment {
    blocks: HashMap<BlockPos, String>,
}

impl BlockAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: HashMap::with_capacity(capacity),
        }
    }

    /// Set the block at `pos`, returning the previous one.
    pub fn insert(&mut self, pos: BlockPos, block: impl Into<String>) -> Option<String> {
        self.blocks.insert(pos, block.into())
    }

    pub fn get(&self, pos: &BlockPos) -> Option<&str> {
        self.blocks.get(pos).map(String::as_str)
    }

    pub fn contains(&self, pos: &BlockPos) -> bool {
        self.blocks.contains_key(pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, BlockPos, String> {
        self.blocks.iter()
    }
}

impl FromIterator<(BlockPos, String)> for BlockAssignment {
    fn from_iter<I: IntoIterator<Item = (BlockPos, String)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BlockAssignment {
    type Item = (BlockPos, String);
    type IntoIter = hash_map::IntoIter<BlockPos, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockAssignment {
    type Item = (&'a BlockPos, &'a String);
    type IntoIter = hash_map::Iter<'a, BlockPos, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut blocks = BlockAssignment::new();
        assert!(blocks.is_empty());
        assert_eq!(blocks.insert(BlockPos::new(1, 2, 3), "red_concrete"), None);
        assert_eq!(
            blocks.insert(BlockPos::new(1, 2, 3), "blue_concrete"),
            Some("red_concrete".to_string())
        );
        assert_eq!(blocks.get(&BlockPos::new(1, 2, 3)), Some("blue_concrete"));
        assert!(blocks.contains(&BlockPos::new(1, 2, 3)));
        assert!(!blocks.contains(&BlockPos::new(0, 0, 0)));
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_collect() {
        let blocks: BlockAssignment = (0..3)
            .map(|x| (BlockPos::new(x, 0, 0), "white_concrete".to_string()))
            .collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks.iter().count(), 3);
    }
}
