use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::model::Position;

pub const DEFAULT_SEGMENTS_PER_EDGE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Subdivides every edge of a polyline into `segments_per_edge` straight
/// pieces.
///
/// Emits `t = j / segments_per_edge` for `j in 0..segments_per_edge` on each
/// consecutive pair, then the final input point once. Corners stay sharp.
/// Fewer than two positions are returned unchanged.
#[allow(clippy::cast_precision_loss)]
pub fn densify(positions: &[Position], segments_per_edge: NonZeroUsize) -> Vec<Position> {
    if positions.len() < 2 {
        return positions.to_vec();
    }

    let n = segments_per_edge.get();
    let mut dense = Vec::with_capacity((positions.len() - 1) * n + 1);
    for (a, b) in positions.iter().tuple_windows() {
        dense.extend((0..n).map(|j| a.lerp(b, j as f64 / n as f64)));
    }
    dense.extend(positions.last().copied());
    dense
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn sample_count_and_endpoints() {
        let route = [
            Position::new(0.0, 0.0, 0.0),
            Position::new(1.0, 0.0, 0.0),
            Position::new(1.0, 2.0, 4.0),
            Position::new(3.0, 2.0, 4.0),
        ];
        for per_edge in [1, 2, 7, 20] {
            let dense = densify(&route, n(per_edge));
            assert_eq!(dense.len(), (route.len() - 1) * per_edge + 1);
            assert_eq!(dense.first(), route.first());
            assert_eq!(dense.last(), route.last());
        }
    }

    #[test]
    fn interpolates_linearly_within_each_edge() {
        let route = [Position::new(0.0, 0.0, 0.0), Position::new(4.0, 8.0, 2.0)];
        let dense = densify(&route, n(4));
        assert_eq!(dense.len(), 5);
        assert_relative_eq!(dense[1].lon, 1.0);
        assert_relative_eq!(dense[2].lat, 4.0);
        assert_relative_eq!(dense[3].alt, 1.5);
    }

    #[test]
    fn corner_points_are_preserved() {
        let route = [
            Position::new(0.0, 0.0, 0.0),
            Position::new(1.0, 0.0, 0.0),
            Position::new(1.0, 1.0, 0.0),
        ];
        let dense = densify(&route, DEFAULT_SEGMENTS_PER_EDGE);
        assert_eq!(dense[20], route[1]);
    }

    #[test]
    fn degenerate_input_is_unchanged() {
        assert!(densify(&[], n(5)).is_empty());
        let single = [Position::new(121.5, 24.9, 1.5)];
        assert_eq!(densify(&single, n(5)), single.to_vec());
    }
}
