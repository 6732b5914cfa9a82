//! # Construction Quantities
//!
//! Material take-offs for concrete, paint and tile. Each calculator turns
//! geometry into a buyable quantity: bags, cans, tiles and boxes are always
//! rounded up to whole units.
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::calculations::construction::{calculate_concrete, ConcreteInput, ConcreteShape};
//!
//! let input = ConcreteInput {
//!     shape: ConcreteShape::Slab { length_ft: 10.0, width_ft: 10.0, depth_ft: 0.5 },
//!     quantity: 1,
//!     waste_pct: 0.0,
//! };
//! let result = calculate_concrete(&input).unwrap();
//! assert_eq!(result.cubic_feet, 50.0);
//! assert_eq!(result.cubic_yards, 1.85);
//! assert_eq!(result.bags, 74);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{cylinder_volume, rectangle_perimeter, rectangular_volume, round_to};
use crate::errors::CalcResult;
use crate::units::{CubicFeet, CubicYards, SqFt, SqIn};
use crate::validation::{reject, require_non_negative, require_positive, require_range};

/// Premix bags per cubic yard of concrete
pub const BAGS_PER_CUBIC_YARD: f64 = 40.0;

/// Area deducted per door (ft², 3' × 7')
pub const DOOR_AREA_SQFT: f64 = 21.0;

/// Area deducted per window (ft², 3' × 4')
pub const WINDOW_AREA_SQFT: f64 = 12.0;

/// Typical coverage of one gallon of paint (ft²)
pub const DEFAULT_PAINT_COVERAGE_SQFT: f64 = 350.0;

/// Grout joints up to this width use the narrow tier (in)
pub const NARROW_GROUT_MAX_IN: f64 = 0.125;

/// Grout joints up to this width use the medium tier (in)
pub const MEDIUM_GROUT_MAX_IN: f64 = 0.25;

/// Grout (lb per 100 ft²) for narrow, medium and wide joints
pub const GROUT_LB_PER_100_SQFT: [f64; 3] = [5.0, 10.0, 15.0];

/// Round a fractional count up to whole purchase units.
///
/// Trimmed to 6 decimals first so float noise (100 × 1.1) never adds a unit.
/// Counts that do not fit a `u32` are rejected under `field`.
pub fn whole_units(field: &str, count: f64) -> CalcResult<u32> {
    let whole = round_to(count, 6).ceil();
    if !whole.is_finite() || whole > u32::MAX as f64 {
        return Err(reject(field, count, "Too many units to count; check the dimensions"));
    }
    Ok(whole as u32)
}

fn default_quantity() -> u32 {
    1
}

fn default_coats() -> u32 {
    2
}

fn default_coverage() -> f64 {
    DEFAULT_PAINT_COVERAGE_SQFT
}

fn default_grout_width() -> f64 {
    NARROW_GROUT_MAX_IN
}

fn default_tile_waste() -> f64 {
    10.0
}

// ============================================================================
// Concrete
// ============================================================================

/// Pour geometry. All dimensions in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ConcreteShape {
    Slab {
        length_ft: f64,
        width_ft: f64,
        depth_ft: f64,
    },
    CircularSlab {
        diameter_ft: f64,
        depth_ft: f64,
    },
    Column {
        diameter_ft: f64,
        height_ft: f64,
    },
}

impl ConcreteShape {
    fn validate(&self) -> CalcResult<()> {
        match *self {
            ConcreteShape::Slab {
                length_ft,
                width_ft,
                depth_ft,
            } => {
                require_positive("length_ft", length_ft)?;
                require_positive("width_ft", width_ft)?;
                require_positive("depth_ft", depth_ft)?;
            }
            ConcreteShape::CircularSlab { diameter_ft, depth_ft } => {
                require_positive("diameter_ft", diameter_ft)?;
                require_positive("depth_ft", depth_ft)?;
            }
            ConcreteShape::Column { diameter_ft, height_ft } => {
                require_positive("diameter_ft", diameter_ft)?;
                require_positive("height_ft", height_ft)?;
            }
        }
        Ok(())
    }

    /// Volume of one pour
    pub fn volume(&self) -> CubicFeet {
        let cuft = match *self {
            ConcreteShape::Slab {
                length_ft,
                width_ft,
                depth_ft,
            } => rectangular_volume(length_ft, width_ft, depth_ft),
            ConcreteShape::CircularSlab { diameter_ft, depth_ft } => cylinder_volume(diameter_ft, depth_ft),
            ConcreteShape::Column { diameter_ft, height_ft } => cylinder_volume(diameter_ft, height_ft),
        };
        CubicFeet(cuft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteInput {
    #[serde(flatten)]
    pub shape: ConcreteShape,
    /// Number of identical pours (e.g. footings)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub waste_pct: f64,
}

impl ConcreteInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.shape.validate()?;
        if self.quantity == 0 {
            return Err(reject("quantity", 0.0, "Must be at least 1"));
        }
        require_range("waste_pct", self.waste_pct, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteResult {
    /// Volume including waste
    pub cubic_feet: f64,
    /// Volume in cubic yards, rounded to 2 decimals
    pub cubic_yards: f64,
    /// Premix bags, rounded up
    pub bags: u32,
}

/// Calculate concrete volume and bag count.
pub fn calculate_concrete(input: &ConcreteInput) -> CalcResult<ConcreteResult> {
    input.validate()?;

    let volume = input.shape.volume() * input.quantity as f64 * (1.0 + input.waste_pct / 100.0);
    let yards: CubicYards = volume.into();
    // Bag count is taken from the yardage as displayed.
    let cubic_yards = round_to(yards.0, 2);
    let bags = whole_units("bags", cubic_yards * BAGS_PER_CUBIC_YARD)?;

    Ok(ConcreteResult {
        cubic_feet: volume.0,
        cubic_yards,
        bags,
    })
}

// ============================================================================
// Paint
// ============================================================================

/// Rectangular room to paint. Dimensions in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintInput {
    pub room_length_ft: f64,
    pub room_width_ft: f64,
    pub wall_height_ft: f64,
    #[serde(default)]
    pub doors: u32,
    #[serde(default)]
    pub windows: u32,
    #[serde(default = "default_coats")]
    pub coats: u32,
    #[serde(default = "default_coverage")]
    pub coverage_sqft_per_gallon: f64,
    #[serde(default)]
    pub include_ceiling: bool,
}

impl PaintInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("room_length_ft", self.room_length_ft)?;
        require_positive("room_width_ft", self.room_width_ft)?;
        require_positive("wall_height_ft", self.wall_height_ft)?;
        require_positive("coverage_sqft_per_gallon", self.coverage_sqft_per_gallon)?;
        if self.coats == 0 {
            return Err(reject("coats", 0.0, "Must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintResult {
    pub wall_area_sqft: f64,
    pub openings_sqft: f64,
    pub ceiling_area_sqft: f64,
    /// Walls minus openings, plus ceiling if included
    pub net_area_sqft: f64,
    pub gallons: f64,
    /// Whole gallon cans to buy
    pub cans: u32,
}

/// Calculate paint needed for a room.
pub fn calculate_paint(input: &PaintInput) -> CalcResult<PaintResult> {
    input.validate()?;

    let wall_area = rectangle_perimeter(input.room_length_ft, input.room_width_ft) * input.wall_height_ft;
    let openings = input.doors as f64 * DOOR_AREA_SQFT + input.windows as f64 * WINDOW_AREA_SQFT;
    let ceiling = if input.include_ceiling {
        input.room_length_ft * input.room_width_ft
    } else {
        0.0
    };

    let wall_net = wall_area - openings;
    if wall_net <= 0.0 {
        return Err(reject("doors", openings, "Doors and windows exceed the wall area"));
    }
    let net_area = wall_net + ceiling;
    let gallons = net_area * input.coats as f64 / input.coverage_sqft_per_gallon;
    let cans = whole_units("cans", gallons)?;

    Ok(PaintResult {
        wall_area_sqft: wall_area,
        openings_sqft: openings,
        ceiling_area_sqft: ceiling,
        net_area_sqft: net_area,
        gallons,
        cans,
    })
}

// ============================================================================
// Tile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInput {
    pub area_sqft: f64,
    pub tile_length_in: f64,
    pub tile_width_in: f64,
    #[serde(default = "default_grout_width")]
    pub grout_width_in: f64,
    #[serde(default = "default_tile_waste")]
    pub waste_pct: f64,
    #[serde(default)]
    pub tiles_per_box: Option<u32>,
}

impl TileInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("area_sqft", self.area_sqft)?;
        require_positive("tile_length_in", self.tile_length_in)?;
        require_positive("tile_width_in", self.tile_width_in)?;
        require_non_negative("grout_width_in", self.grout_width_in)?;
        require_range("waste_pct", self.waste_pct, 0.0, 100.0)?;
        if self.tiles_per_box == Some(0) {
            return Err(reject("tiles_per_box", 0.0, "Must be at least 1"));
        }
        Ok(())
    }

    /// Footprint of one tile plus its share of grout joint
    pub fn tile_footprint(&self) -> SqIn {
        SqIn((self.tile_length_in + self.grout_width_in) * (self.tile_width_in + self.grout_width_in))
    }
}

/// Grout needed (lb) for an area, by joint width tier
pub fn grout_weight_lb(area_sqft: f64, grout_width_in: f64) -> f64 {
    let per_100 = if grout_width_in <= NARROW_GROUT_MAX_IN {
        GROUT_LB_PER_100_SQFT[0]
    } else if grout_width_in <= MEDIUM_GROUT_MAX_IN {
        GROUT_LB_PER_100_SQFT[1]
    } else {
        GROUT_LB_PER_100_SQFT[2]
    };
    area_sqft / 100.0 * per_100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileResult {
    pub tiles: u32,
    pub boxes: Option<u32>,
    pub grout_lb: f64,
}

/// Calculate tiles, boxes and grout for a floor or wall.
pub fn calculate_tile(input: &TileInput) -> CalcResult<TileResult> {
    input.validate()?;

    let area: SqIn = SqFt(input.area_sqft).into();
    let tiles = whole_units("tiles", area.0 / input.tile_footprint().0 * (1.0 + input.waste_pct / 100.0))?;
    let boxes = input
        .tiles_per_box
        .map(|per_box| whole_units("boxes", tiles as f64 / per_box as f64))
        .transpose()?;

    Ok(TileResult {
        tiles,
        boxes,
        grout_lb: grout_weight_lb(input.area_sqft, input.grout_width_in),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_reference() {
        let input = ConcreteInput {
            shape: ConcreteShape::Slab {
                length_ft: 10.0,
                width_ft: 10.0,
                depth_ft: 0.5,
            },
            quantity: 1,
            waste_pct: 0.0,
        };
        let result = calculate_concrete(&input).unwrap();
        assert_eq!(result.cubic_feet, 50.0);
        assert_eq!(result.cubic_yards, 1.85);
        assert_eq!(result.bags, 74);
    }

    #[test]
    fn test_columns_with_waste() {
        let input = ConcreteInput {
            shape: ConcreteShape::Column {
                diameter_ft: 1.0,
                height_ft: 4.0,
            },
            quantity: 4,
            waste_pct: 10.0,
        };
        let result = calculate_concrete(&input).unwrap();
        let expected = std::f64::consts::PI * 0.25 * 4.0 * 4.0 * 1.1;
        assert!((result.cubic_feet - expected).abs() < 1e-9);
        assert_eq!(result.cubic_yards, 0.51);
        assert_eq!(result.bags, 21);
    }

    #[test]
    fn test_concrete_json_shape_tag() {
        let json = r#"{"shape":"CircularSlab","diameter_ft":8.0,"depth_ft":0.33}"#;
        let input: ConcreteInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.quantity, 1);
        assert!(calculate_concrete(&input).is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let input = ConcreteInput {
            shape: ConcreteShape::Slab {
                length_ft: 10.0,
                width_ft: 10.0,
                depth_ft: 0.0,
            },
            quantity: 1,
            waste_pct: 0.0,
        };
        assert_eq!(calculate_concrete(&input).unwrap_err().field(), Some("depth_ft"));
    }

    fn bedroom() -> PaintInput {
        PaintInput {
            room_length_ft: 12.0,
            room_width_ft: 10.0,
            wall_height_ft: 8.0,
            doors: 1,
            windows: 2,
            coats: 2,
            coverage_sqft_per_gallon: DEFAULT_PAINT_COVERAGE_SQFT,
            include_ceiling: false,
        }
    }

    #[test]
    fn test_paint_room() {
        let result = calculate_paint(&bedroom()).unwrap();
        assert_eq!(result.wall_area_sqft, 352.0);
        assert_eq!(result.openings_sqft, 45.0);
        assert_eq!(result.net_area_sqft, 307.0);
        assert!((result.gallons - 614.0 / 350.0).abs() < 1e-12);
        assert_eq!(result.cans, 2);
    }

    #[test]
    fn test_paint_with_ceiling() {
        let input = PaintInput {
            include_ceiling: true,
            ..bedroom()
        };
        let result = calculate_paint(&input).unwrap();
        assert_eq!(result.ceiling_area_sqft, 120.0);
        assert_eq!(result.net_area_sqft, 427.0);
        assert_eq!(result.cans, 3);
    }

    #[test]
    fn test_paint_openings_exceed_walls() {
        let input = PaintInput {
            doors: 20,
            ..bedroom()
        };
        assert!(calculate_paint(&input).is_err());
    }

    #[test]
    fn test_tile_counts() {
        let input = TileInput {
            area_sqft: 100.0,
            tile_length_in: 12.0,
            tile_width_in: 12.0,
            grout_width_in: 0.0,
            waste_pct: 10.0,
            tiles_per_box: Some(12),
        };
        let result = calculate_tile(&input).unwrap();
        assert_eq!(result.tiles, 110);
        assert_eq!(result.boxes, Some(10));
        assert_eq!(result.grout_lb, 5.0);
    }

    #[test]
    fn test_tile_count_overflow_rejected() {
        let input = TileInput {
            area_sqft: 1e9,
            tile_length_in: 0.01,
            tile_width_in: 0.01,
            grout_width_in: 0.0,
            waste_pct: 0.0,
            tiles_per_box: None,
        };
        let err = calculate_tile(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("tiles"));
    }

    #[test]
    fn test_whole_units_bounds() {
        assert_eq!(whole_units("tiles", 110.00000000000001).unwrap(), 110);
        assert_eq!(whole_units("tiles", u32::MAX as f64).unwrap(), u32::MAX);
        assert!(whole_units("tiles", u32::MAX as f64 + 1.0).is_err());
        assert!(whole_units("tiles", f64::INFINITY).is_err());
    }

    #[test]
    fn test_grout_tiers() {
        assert_eq!(grout_weight_lb(100.0, 0.125), 5.0);
        assert_eq!(grout_weight_lb(100.0, 0.1875), 10.0);
        assert_eq!(grout_weight_lb(200.0, 0.375), 30.0);
    }
}
