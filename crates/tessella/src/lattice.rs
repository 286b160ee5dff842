//! Built-in tiling sources and the type catalog.
//!
//! These are concrete [`TilingSource`] implementations for a handful of
//! classic lattices - enough to drive the outline builder and mesh
//! assembler end-to-end without the external isohedral enumeration library,
//! and to exercise every edge category. Each source enumerates placements
//! with plain row/column sweeps over the requested rectangle.

use std::f64::consts::PI;

use crate::descriptor::{EdgeKind, Placement, TilingDescriptor, TilingSource};
use crate::geometry::{Affine2, Point};

/// The catalog of built-in tiling types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingType {
    Square,
    Brick,
    Hexagon,
    Pentagon,
}

impl TilingType {
    /// All available types, in catalog order.
    pub fn all() -> &'static [TilingType] {
        &[
            TilingType::Square,
            TilingType::Brick,
            TilingType::Hexagon,
            TilingType::Pentagon,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TilingType::Square => "square",
            TilingType::Brick => "brick",
            TilingType::Hexagon => "hexagon",
            TilingType::Pentagon => "pentagon",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TilingType::Square => "Checkerboard square grid",
            TilingType::Brick => "Running-bond brick courses",
            TilingType::Hexagon => "Regular hexagonal honeycomb",
            TilingType::Pentagon => "Interlocking house pentagons",
        }
    }

    pub fn from_name(name: &str) -> Option<TilingType> {
        match name.to_lowercase().as_str() {
            "square" | "grid" => Some(TilingType::Square),
            "brick" | "running-bond" => Some(TilingType::Brick),
            "hexagon" | "hex" | "honeycomb" => Some(TilingType::Hexagon),
            "pentagon" | "house" => Some(TilingType::Pentagon),
            _ => None,
        }
    }

    /// Position of this type in the catalog.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// Resolve a continuous type value into a type plus morph fraction.
    ///
    /// Out-of-range values clamp to the nearest valid type - this is driven
    /// by UI sliders and must never fail or stick.
    pub fn from_continuous(value: f64) -> (TilingType, f64) {
        let max = (Self::all().len() - 1) as f64;
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };
        let index = value.floor() as usize;
        (Self::all()[index], value - index as f64)
    }

    /// Build a fresh source for this type with default parameters.
    pub fn source(&self) -> Box<dyn TilingSource> {
        match self {
            TilingType::Square => Box::new(SquareSource),
            TilingType::Brick => Box::new(BrickSource::default()),
            TilingType::Hexagon => Box::new(HexSource),
            TilingType::Pentagon => Box::new(PentagonSource::default()),
        }
    }
}

/// Unit squares on the integer lattice, checkerboard aspects.
pub struct SquareSource;

impl TilingSource for SquareSource {
    fn descriptor(&self) -> TilingDescriptor {
        TilingDescriptor::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            vec![EdgeKind::AsymmetricCurve; 4],
        )
        .with_aspects(2)
    }

    fn set_params(&mut self, _params: &[f64]) {}

    fn fill_region(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Placement> {
        let mut placements = Vec::new();
        let mut row = ymin.floor() as i64 - 1;
        while row as f64 <= ymax + 1.0 {
            let mut col = xmin.floor() as i64 - 1;
            while col as f64 <= xmax + 1.0 {
                placements.push(Placement {
                    transform: Affine2::translation(col as f64, row as f64),
                    aspect: (row + col).rem_euclid(2) as usize,
                });
                col += 1;
            }
            row += 1;
        }
        placements
    }
}

/// Running-bond brick courses. Two parameters: brick width and the
/// fractional offset between alternating courses.
pub struct BrickSource {
    width: f64,
    row_offset: f64,
}

impl Default for BrickSource {
    fn default() -> Self {
        Self { width: 2.0, row_offset: 0.5 }
    }
}

impl TilingSource for BrickSource {
    fn descriptor(&self) -> TilingDescriptor {
        TilingDescriptor::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(self.width, 0.0),
                Point::new(self.width, 1.0),
                Point::new(0.0, 1.0),
            ],
            vec![
                EdgeKind::Straight,
                EdgeKind::AsymmetricCurve,
                EdgeKind::Straight,
                EdgeKind::AsymmetricCurve,
            ],
        )
        .with_params(2)
        .with_aspects(2)
    }

    fn set_params(&mut self, params: &[f64]) {
        if let Some(&p) = params.first() {
            self.width = 1.5 + p;
        }
        if let Some(&p) = params.get(1) {
            self.row_offset = p;
        }
    }

    fn fill_region(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Placement> {
        let mut placements = Vec::new();
        let mut row = ymin.floor() as i64 - 1;
        while row as f64 <= ymax + 1.0 {
            let shift = if row.rem_euclid(2) == 1 { self.width * self.row_offset } else { 0.0 };
            let mut col = ((xmin - shift) / self.width).floor() as i64 - 1;
            while col as f64 * self.width + shift <= xmax + self.width {
                placements.push(Placement {
                    transform: Affine2::translation(col as f64 * self.width + shift, row as f64),
                    aspect: row.rem_euclid(2) as usize,
                });
                col += 1;
            }
            row += 1;
        }
        placements
    }
}

/// Regular flat-top hexagons, circumradius 1, three-colored aspects.
pub struct HexSource;

/// Column pitch of a flat-top hexagon grid at circumradius 1.
const HEX_DX: f64 = 1.5;
/// Row pitch: √3.
const HEX_DY: f64 = 1.7320508075688772;

impl TilingSource for HexSource {
    fn descriptor(&self) -> TilingDescriptor {
        let vertices = (0..6)
            .map(|i| {
                let a = PI / 3.0 * i as f64;
                Point::new(a.cos(), a.sin())
            })
            .collect();
        TilingDescriptor::new(vertices, vec![EdgeKind::Straight; 6]).with_aspects(3)
    }

    fn set_params(&mut self, _params: &[f64]) {}

    fn fill_region(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Placement> {
        let mut placements = Vec::new();
        let mut col = ((xmin - 2.0) / HEX_DX).floor() as i64;
        while col as f64 * HEX_DX <= xmax + 2.0 {
            let shift = if col.rem_euclid(2) == 1 { HEX_DY / 2.0 } else { 0.0 };
            let mut row = ((ymin - 2.0) / HEX_DY).floor() as i64;
            while row as f64 * HEX_DY + shift <= ymax + 2.0 {
                placements.push(Placement {
                    transform: Affine2::translation(
                        col as f64 * HEX_DX,
                        row as f64 * HEX_DY + shift,
                    ),
                    aspect: (col - row).rem_euclid(3) as usize,
                });
                row += 1;
            }
            col += 1;
        }
        placements
    }
}

/// "House" pentagons: a square body with a triangular roof. Upright and
/// inverted houses interlock row by row; one parameter controls the roof
/// height. Roof edges carry symmetric curves.
pub struct PentagonSource {
    roof: f64,
}

impl Default for PentagonSource {
    fn default() -> Self {
        Self { roof: 0.5 }
    }
}

impl TilingSource for PentagonSource {
    fn descriptor(&self) -> TilingDescriptor {
        TilingDescriptor::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.5, 1.0 + self.roof),
                Point::new(0.0, 1.0),
            ],
            vec![
                EdgeKind::Straight,
                EdgeKind::Straight,
                EdgeKind::SymmetricCurve,
                EdgeKind::SymmetricCurve,
                EdgeKind::Straight,
            ],
        )
        .with_params(1)
        .with_aspects(4)
    }

    fn set_params(&mut self, params: &[f64]) {
        if let Some(&p) = params.first() {
            self.roof = 0.3 + 0.5 * p;
        }
    }

    fn fill_region(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Placement> {
        // Vertical period of an upright/inverted pair of rows
        let period = 2.0 + self.roof;
        let mut placements = Vec::new();

        let mut row = ((ymin - period) / period).floor() as i64;
        while row as f64 * period <= ymax + period {
            let shift = 0.5 * row.rem_euclid(2) as f64;
            let base_y = row as f64 * period;

            let mut col = (xmin - 2.0).floor() as i64;
            while col as f64 <= xmax + 2.0 {
                let x = col as f64 + shift;
                let parity = col.rem_euclid(2) as usize;

                // Upright house
                placements.push(Placement {
                    transform: Affine2::translation(x, base_y),
                    aspect: parity * 2,
                });
                // Inverted house, roof nesting into the gap between uprights
                placements.push(Placement {
                    transform: Affine2::rotation(PI)
                        .then(&Affine2::translation(x + 1.5, base_y + period)),
                    aspect: parity * 2 + 1,
                });

                col += 1;
            }
            row += 1;
        }
        placements
    }
}
