//! # Geometry Formulas
//!
//! Areas and volumes for material take-offs. Units are whatever the caller
//! passes in, consistently.

use std::f64::consts::PI;

/// Rectangular prism: V = l × w × d
#[inline]
pub fn rectangular_volume(length: f64, width: f64, depth: f64) -> f64 {
    length * width * depth
}

/// Circle area from diameter: A = π(d/2)²
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    let r = diameter / 2.0;
    PI * r * r
}

/// Cylinder (round slab or column): V = πr² × h
#[inline]
pub fn cylinder_volume(diameter: f64, height: f64) -> f64 {
    circle_area(diameter) * height
}

/// Rectangle perimeter: 2(l + w)
#[inline]
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes() {
        assert_eq!(rectangular_volume(10.0, 10.0, 0.5), 50.0);
        assert!((cylinder_volume(2.0, 1.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(rectangle_perimeter(12.0, 10.0), 44.0);
    }
}
