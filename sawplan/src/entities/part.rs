/// Rectangular part to be cut from the stock block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub id: u64,
    /// Extent along the stock's width axis, in the part's current orientation
    pub width: f32,
    /// Extent along the stock's length axis, in the part's current orientation
    pub length: f32,
    pub thickness: f32,
    /// Whether width and length are swapped with respect to the requested dimensions
    pub rotated: bool,
}

impl Part {
    pub fn new(id: u64, width: f32, length: f32, thickness: f32) -> Part {
        Part {
            id,
            width,
            length,
            thickness,
            rotated: false,
        }
    }

    /// Swaps width and length and flips the `rotated` marker.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.length);
        self.rotated = !self.rotated;
    }

    /// The part's dimensions as `(smaller, larger)`, regardless of orientation.
    pub fn dims_sorted(&self) -> (f32, f32) {
        if self.width <= self.length {
            (self.width, self.length)
        } else {
            (self.length, self.width)
        }
    }

    /// Slab left on top of the part after the face cut which brings the stock
    /// height down to the part's thickness.
    pub fn face_waste(&self, stock_height: f32) -> f32 {
        stock_height - self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_swaps_dims_and_flips_marker() {
        let mut part = Part::new(1, 100.0, 250.0, 40.0);
        part.rotate();
        assert_eq!(part.width, 250.0);
        assert_eq!(part.length, 100.0);
        assert!(part.rotated);
        part.rotate();
        assert_eq!((part.width, part.length), (100.0, 250.0));
        assert!(!part.rotated);
    }

    #[test]
    fn dims_sorted_ignores_orientation() {
        let mut part = Part::new(1, 300.0, 120.0, 40.0);
        assert_eq!(part.dims_sorted(), (120.0, 300.0));
        part.rotate();
        assert_eq!(part.dims_sorted(), (120.0, 300.0));
    }
}
