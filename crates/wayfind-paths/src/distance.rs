use wayfind_core::Point;

/// Manhattan (L1) distance between two points.
///
/// A lower bound on the number of orthogonal steps between them.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(-2, 3);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_at_coordinate_extremes() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_eq!(manhattan(a, b), u32::MAX);
        assert_eq!(manhattan(b, a), u32::MAX);
    }
}
