//! Penrose P2 (kite/dart) substitution tiling.
//!
//! Generates an aperiodic tiling by repeated deflation: every tile is
//! replaced by a fixed set of smaller tiles, with the edge length shrinking
//! by 1/φ per step (φ = (1+√5)/2, the golden ratio).
//!
//! ## Tiles
//!
//! Both prototiles are quadrilaterals with a mirror symmetry axis, stored as
//! (position, axis angle, kind):
//!
//! - **Kite** (the wide tile): interior angles 72°, 72°, 144°, 72°.
//!   Apex at the position, far vertex one edge length down the axis.
//! - **Dart** (the narrow tile): interior angles 72°, 36°, 216°, 36°.
//!   Apex at the position, reflex vertex 1/φ edge lengths down the axis.
//!
//! ## Deflation
//!
//! A kite deflates into 2 kites + 2 darts, a dart into 1 kite + 2 darts.
//! The dart children straddle their parent's boundary, so the neighbouring
//! parent emits the same dart again; those coincident children collapse in
//! the deduplication pass. That collapse is what drives the kite:dart count
//! ratio toward φ as the deflation depth grows.

use crate::geometry::{deg_to_rad, normalize_deg, Point};

/// The golden ratio, (1+√5)/2.
pub const PHI: f64 = 1.618033988749895;

/// Position tolerance divisor for duplicate detection: φ¹⁰.
///
/// Two tiles count as the same tile when their positions differ by less than
/// `edge_length / DEDUP_SIZE_DIVISOR` on both axes. Empirical constant from
/// the original tuning; scaled by the current edge length on purpose - a
/// fixed absolute tolerance would over- or under-merge as tiles shrink.
const DEDUP_SIZE_DIVISOR: f64 = 122.991869381;

/// Angle tolerance in degrees for duplicate detection.
const ANGLE_TOLERANCE_DEG: f64 = 0.001;

/// Upper bound of the radial metric range.
const METRIC_MAX: f64 = 10.0;

/// The two prototile shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// The wide tile.
    Kite,
    /// The narrow tile.
    Dart,
}

/// One placed tile of a substitution tiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
    /// Orientation of the symmetry axis, in degrees. Not normalized;
    /// compare with [`normalize_deg`].
    pub angle: f64,
    pub kind: TileKind,
    /// Radial distance metric, rescaled to [0, 10] over the whole
    /// generation. Consumed downstream as an opaque timing driver.
    pub metric: f64,
}

/// A complete generation of tiles plus the edge length they were built at.
#[derive(Debug, Clone)]
pub struct PenroseTiling {
    pub tiles: Vec<Tile>,
    /// Edge length after all deflation steps: `initial / φ^deflations`.
    pub edge_length: f64,
}

/// Generate a Penrose P2 tiling by deflating the 5-kite "sun" seed.
///
/// Pure function of its inputs: the same `(deflations, edge_length)` always
/// produces the same tiles, so callers can memoize per deflation depth
/// (see [`crate::cache::GeometryCache`]).
///
/// Tile count grows by a factor of φ² ≈ 2.6 per step; cost is unbounded in
/// `deflations` and it is the caller's job to keep the depth sane (values
/// above ~12 produce hundreds of thousands of tiles).
pub fn generate_penrose(deflations: u32, edge_length: f64) -> PenroseTiling {
    let mut tiles = sun_seed();
    let mut edge = edge_length;

    for _ in 0..deflations {
        let mut children = Vec::with_capacity(tiles.len() * 4);
        for tile in &tiles {
            deflate_into(tile, edge, &mut children);
        }
        // Dedup tolerance tracks the children's edge length, not the parent's.
        edge /= PHI;
        tiles = dedup(children, edge);
    }

    assign_metric(&mut tiles);
    PenroseTiling { tiles, edge_length: edge }
}

/// The "sun": 5 kites sharing their apex at the origin, 72° apart.
fn sun_seed() -> Vec<Tile> {
    (0..5)
        .map(|i| Tile {
            x: 0.0,
            y: 0.0,
            angle: -90.0 + 72.0 * i as f64,
            kind: TileKind::Kite,
            metric: 0.0,
        })
        .collect()
}

/// Emit the deflation children of one tile.
///
/// Offsets are expressed in the parent's frame: `edge` is the parent's edge
/// length, angles are the parent axis ± fixed multiples of 36°.
fn deflate_into(parent: &Tile, edge: f64, out: &mut Vec<Tile>) {
    let a = parent.angle;
    match parent.kind {
        TileKind::Kite => {
            // Two kites with apexes on the parent's wing vertices, pointing
            // back inward; two darts sharing the parent's apex.
            out.push(spawn_at(parent, a + 36.0, edge, a - 108.0, TileKind::Kite));
            out.push(spawn_at(parent, a - 36.0, edge, a + 108.0, TileKind::Kite));
            out.push(spawn(parent.x, parent.y, a + 36.0, TileKind::Dart));
            out.push(spawn(parent.x, parent.y, a - 36.0, TileKind::Dart));
        }
        TileKind::Dart => {
            // One kite nested in the apex corner; two darts with apexes on
            // the parent's wing vertices, straddling the long edges.
            out.push(spawn(parent.x, parent.y, a, TileKind::Kite));
            out.push(spawn_at(parent, a + 36.0, edge, a + 216.0, TileKind::Dart));
            out.push(spawn_at(parent, a - 36.0, edge, a + 144.0, TileKind::Dart));
        }
    }
}

/// Child at the parent position offset by `edge` along `offset_angle`.
fn spawn_at(parent: &Tile, offset_angle: f64, edge: f64, angle: f64, kind: TileKind) -> Tile {
    let rad = deg_to_rad(offset_angle);
    spawn(
        parent.x + edge * rad.cos(),
        parent.y + edge * rad.sin(),
        angle,
        kind,
    )
}

fn spawn(x: f64, y: f64, angle: f64, kind: TileKind) -> Tile {
    Tile { x, y, angle, kind, metric: 0.0 }
}

/// Filter coincident children, keeping the first-seen tile.
///
/// O(n²): every candidate is compared against the already-accepted list.
/// Insertion order is preserved.
fn dedup(candidates: Vec<Tile>, edge: f64) -> Vec<Tile> {
    let tolerance = edge / DEDUP_SIZE_DIVISOR;
    let mut accepted: Vec<Tile> = Vec::with_capacity(candidates.len());

    'candidates: for candidate in candidates {
        for kept in &accepted {
            if same_tile(kept, &candidate, tolerance) {
                continue 'candidates;
            }
        }
        accepted.push(candidate);
    }

    accepted
}

/// Duplicate predicate: same kind, positions within `tolerance` on both
/// axes, normalized angles within [`ANGLE_TOLERANCE_DEG`].
///
/// All comparisons are strict `<`; a tile exactly on the tolerance boundary
/// is kept. An extra tile is invisible, a missing one is a seam.
pub fn same_tile(a: &Tile, b: &Tile, tolerance: f64) -> bool {
    if a.kind != b.kind {
        return false;
    }
    if (a.x - b.x).abs() >= tolerance || (a.y - b.y).abs() >= tolerance {
        return false;
    }
    let diff = (normalize_deg(a.angle) - normalize_deg(b.angle)).abs();
    diff.min(360.0 - diff) < ANGLE_TOLERANCE_DEG
}

/// Rescale distance-from-origin into a [0, 10] metric over the generation.
///
/// When every tile sits at the origin (the undeflated seed) the maximum
/// distance is 0 and every metric stays 0 - never NaN.
fn assign_metric(tiles: &mut [Tile]) {
    let max_distance = tiles
        .iter()
        .map(|t| (t.x * t.x + t.y * t.y).sqrt())
        .fold(0.0, f64::max);

    if max_distance <= 0.0 {
        return;
    }

    for tile in tiles.iter_mut() {
        let distance = (tile.x * tile.x + tile.y * tile.y).sqrt();
        tile.metric = distance / max_distance * METRIC_MAX;
    }
}

/// Closed quadrilateral outline of a tile at the given edge length.
///
/// Vertex order: apex, wing, axis vertex (far vertex for kites, reflex
/// vertex for darts), other wing.
pub fn tile_outline(tile: &Tile, edge: f64) -> [Point; 4] {
    let axis = deg_to_rad(tile.angle);
    let left = deg_to_rad(tile.angle + 36.0);
    let right = deg_to_rad(tile.angle - 36.0);
    let axis_reach = match tile.kind {
        TileKind::Kite => edge,
        TileKind::Dart => edge / PHI,
    };

    [
        Point::new(tile.x, tile.y),
        Point::new(tile.x + edge * left.cos(), tile.y + edge * left.sin()),
        Point::new(tile.x + axis_reach * axis.cos(), tile.y + axis_reach * axis.sin()),
        Point::new(tile.x + edge * right.cos(), tile.y + edge * right.sin()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deflations_returns_sun_seed() {
        let tiling = generate_penrose(0, 100.0);
        assert_eq!(tiling.tiles.len(), 5);
        assert_eq!(tiling.edge_length, 100.0);

        let mut angles: Vec<f64> = tiling
            .tiles
            .iter()
            .map(|t| normalize_deg(t.angle))
            .collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(angles, vec![54.0, 126.0, 198.0, 270.0, 342.0]);

        for tile in &tiling.tiles {
            assert_eq!(tile.x, 0.0);
            assert_eq!(tile.y, 0.0);
            assert_eq!(tile.kind, TileKind::Kite);
            assert_eq!(tile.metric, 0.0, "degenerate seed keeps metric 0, not NaN");
        }
    }

    #[test]
    fn first_deflation_merges_shared_darts() {
        let tiling = generate_penrose(1, 100.0);
        // 5 kites raw-emit 10 kites + 10 darts; the darts coincide pairwise
        // at the origin and collapse to 5.
        assert_eq!(tiling.tiles.len(), 15);
        assert!(tiling.tiles.len() > 5 && tiling.tiles.len() < 25);
        assert!((tiling.edge_length - 100.0 / PHI).abs() < 1e-9);

        let kites = tiling.tiles.iter().filter(|t| t.kind == TileKind::Kite).count();
        let darts = tiling.tiles.iter().filter(|t| t.kind == TileKind::Dart).count();
        assert_eq!(kites, 10);
        assert_eq!(darts, 5);
    }

    #[test]
    fn no_duplicates_at_any_tested_depth() {
        for deflations in 0..=6 {
            let tiling = generate_penrose(deflations, 100.0);
            let tolerance = tiling.edge_length / DEDUP_SIZE_DIVISOR;
            for i in 0..tiling.tiles.len() {
                for j in (i + 1)..tiling.tiles.len() {
                    assert!(
                        !same_tile(&tiling.tiles[i], &tiling.tiles[j], tolerance),
                        "duplicate tiles at depth {}: {} and {}",
                        deflations, i, j
                    );
                }
            }
        }
    }

    #[test]
    fn tile_count_never_shrinks() {
        let mut previous = 0;
        for deflations in 0..=6 {
            let count = generate_penrose(deflations, 100.0).tiles.len();
            assert!(
                count > previous,
                "tile count must grow: {} -> {} at depth {}",
                previous, count, deflations
            );
            previous = count;
        }
    }

    #[test]
    fn kind_ratio_approaches_golden_ratio() {
        let ratio_at = |deflations| {
            let tiling = generate_penrose(deflations, 100.0);
            let kites = tiling.tiles.iter().filter(|t| t.kind == TileKind::Kite).count();
            let darts = tiling.tiles.iter().filter(|t| t.kind == TileKind::Dart).count();
            kites as f64 / darts as f64
        };

        let shallow = ratio_at(1); // exactly 2.0
        let deep = ratio_at(6);
        assert!(deep < shallow, "ratio should fall from {} toward φ", shallow);
        assert!(
            deep > 1.3 && deep < 1.9,
            "wide:narrow ratio {} should be near φ ≈ {}",
            deep, PHI
        );
    }

    #[test]
    fn metric_spans_zero_to_ten() {
        let tiling = generate_penrose(4, 100.0);
        let mut saw_max = false;
        for tile in &tiling.tiles {
            assert!(tile.metric >= 0.0 && tile.metric <= 10.0);
            if tile.metric == 10.0 {
                saw_max = true;
            }
        }
        assert!(saw_max, "farthest tile must land exactly on 10");
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_penrose(3, 100.0);
        let b = generate_penrose(3, 100.0);
        assert_eq!(a.tiles.len(), b.tiles.len());
        for (ta, tb) in a.tiles.iter().zip(b.tiles.iter()) {
            assert_eq!(ta.x, tb.x);
            assert_eq!(ta.y, tb.y);
            assert_eq!(ta.angle, tb.angle);
            assert_eq!(ta.kind, tb.kind);
        }
    }

    #[test]
    fn kite_outline_shape() {
        let tile = Tile { x: 0.0, y: 0.0, angle: 0.0, kind: TileKind::Kite, metric: 0.0 };
        let [apex, wing_a, far, wing_b] = tile_outline(&tile, 1.0);

        assert_eq!(apex, Point::new(0.0, 0.0));
        assert!((far.x - 1.0).abs() < 1e-12 && far.y.abs() < 1e-12);
        assert!((apex.distance(wing_a) - 1.0).abs() < 1e-12);
        assert!((apex.distance(wing_b) - 1.0).abs() < 1e-12);
        // Short sides are 1/φ of the edge
        assert!((wing_a.distance(far) - 1.0 / PHI).abs() < 1e-9);
    }

    #[test]
    fn dart_outline_shape() {
        let tile = Tile { x: 0.0, y: 0.0, angle: 90.0, kind: TileKind::Dart, metric: 0.0 };
        let [apex, _, reflex, _] = tile_outline(&tile, 1.0);
        // Reflex vertex sits 1/φ down the axis
        assert!((apex.distance(reflex) - 1.0 / PHI).abs() < 1e-9);
        assert!(reflex.x.abs() < 1e-12, "axis at 90° points straight up");
    }

    #[test]
    fn boundary_tolerance_tie_is_not_a_duplicate() {
        let a = Tile { x: 0.0, y: 0.0, angle: 0.0, kind: TileKind::Kite, metric: 0.0 };
        let tolerance = 0.5;
        let b = Tile { x: tolerance, y: 0.0, ..a };
        assert!(!same_tile(&a, &b, tolerance), "exact tolerance must resolve to distinct");
        let c = Tile { x: tolerance * 0.99, y: 0.0, ..a };
        assert!(same_tile(&a, &c, tolerance));
    }
}
