// src/generator/regions.rs

use crate::map::RegionId;

/// Hands out region ids. Ids only ever go up; merging regions later never
/// frees one.
#[derive(Debug, Clone, Default)]
pub struct RegionAllocator {
    current: Option<RegionId>,
}

impl RegionAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new region and makes it the current one.
    pub fn start_region(&mut self) -> RegionId {
        let next = self.current.map_or(0, |r| r + 1);
        self.current = Some(next);
        next
    }

    /// The region being carved, if one has been started.
    pub fn current(&self) -> Option<RegionId> {
        self.current
    }

    /// How many regions have been started.
    pub fn count(&self) -> usize {
        self.current.map_or(0, |r| r + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_region_counts_up() {
        let mut regions = RegionAllocator::new();
        assert_eq!(regions.current(), None);
        assert_eq!(regions.count(), 0);

        assert_eq!(regions.start_region(), 0);
        assert_eq!(regions.start_region(), 1);
        assert_eq!(regions.current(), Some(1));
        assert_eq!(regions.count(), 2);
    }
}
