/// A circle on the integer lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl Circle {
    pub fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    pub fn is_concentric_with(&self, other: &Circle) -> bool {
        self.center_x == other.center_x && self.center_y == other.center_y
    }

    /// Squared distance between the two centers. Widened so that any pair of
    /// `i32` coordinates fits.
    pub fn center_distance_squared(&self, other: &Circle) -> i128 {
        let dx = i128::from(other.center_x) - i128::from(self.center_x);
        let dy = i128::from(other.center_y) - i128::from(self.center_y);
        dx * dx + dy * dy
    }
}

/// One pair of circles read from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position in the input
    pub ordinal: usize,
    pub first: Circle,
    pub second: Circle,
}

impl TestCase {
    pub fn new(ordinal: usize, first: Circle, second: Circle) -> Self {
        Self {
            ordinal,
            first,
            second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Circle::new(1, 2, 3);
        let b = Circle::new(-4, 7, 1);
        assert_eq!(a.center_distance_squared(&b), 50);
        assert_eq!(b.center_distance_squared(&a), 50);
    }

    #[test]
    fn distance_squared_does_not_overflow() {
        let a = Circle::new(i32::MIN, i32::MIN, 0);
        let b = Circle::new(i32::MAX, i32::MAX, 0);
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        assert_eq!(a.center_distance_squared(&b), 2 * span * span);
    }

    #[test]
    fn concentric() {
        assert!(Circle::new(3, 3, 1).is_concentric_with(&Circle::new(3, 3, 9)));
        assert!(!Circle::new(3, 3, 1).is_concentric_with(&Circle::new(3, 4, 1)));
    }
}
