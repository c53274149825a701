use crate::entities::Part;
use std::ops::Range;

/// Ordered store of all parts requested for a cutting job.
/// Hands out ids monotonically, starting at 1; ids are never reused while the list lives.
#[derive(Clone, Debug)]
pub struct PartList {
    parts: Vec<Part>,
    next_id: u64,
}

impl PartList {
    pub fn new() -> PartList {
        PartList {
            parts: vec![],
            next_id: 1,
        }
    }

    /// Adds `demand` copies of a part, each with its own id.
    /// Returns the range of ids that was assigned.
    pub fn add(&mut self, width: f32, length: f32, thickness: f32, demand: u64) -> Range<u64> {
        let first_id = self.next_id;
        for _ in 0..demand {
            self.parts.push(Part::new(self.next_id, width, length, thickness));
            self.next_id += 1;
        }
        first_id..self.next_id
    }

    /// Removes all parts and restarts id assignment from 1.
    pub fn clear(&mut self) {
        self.parts.clear();
        self.next_id = 1;
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for PartList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_assigned_in_request_order() {
        let mut list = PartList::new();
        assert_eq!(list.add(100.0, 200.0, 40.0, 2), 1..3);
        assert_eq!(list.add(50.0, 80.0, 40.0, 1), 3..4);
        let ids: Vec<u64> = list.parts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn clear_restarts_ids_from_one() {
        let mut list = PartList::new();
        list.add(100.0, 200.0, 40.0, 3);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.add(10.0, 20.0, 5.0, 1), 1..2);
    }

    #[test]
    fn zero_demand_adds_nothing() {
        let mut list = PartList::new();
        let assigned = list.add(100.0, 200.0, 40.0, 0);
        assert!(assigned.is_empty());
        assert!(list.is_empty());
        // The counter must not advance either.
        assert_eq!(list.add(100.0, 200.0, 40.0, 1), 1..2);
    }
}
