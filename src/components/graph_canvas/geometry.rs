//! Geometry primitives used for hit-testing and drawing.
//!
//! All coordinates are in canvas pixel space (origin top-left, y down).

use std::ops::{Add, Sub};

use serde::Deserialize;

/// A point (or offset) in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// A filled circle, used for vertex bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
	pub center: Point,
	pub radius: f64,
}

impl Disk {
	pub const fn new(center: Point, radius: f64) -> Self {
		Self { center, radius }
	}

	/// Boundary inclusive.
	pub fn contains(&self, p: Point) -> bool {
		in_disk(p, self.center, self.radius)
	}
}

/// A straight line between two points, used for edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: Point,
	pub to: Point,
}

impl Segment {
	pub const fn new(from: Point, to: Point) -> Self {
		Self { from, to }
	}
}

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
	(p.x - q.x).hypot(p.y - q.y)
}

/// Returns true iff `p` lies within `radius` of `center` (boundary inclusive).
pub fn in_disk(p: Point, center: Point, radius: f64) -> bool {
	distance(p, center) <= radius
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_is_euclidean() {
		assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
		assert_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
	}

	#[test]
	fn in_disk_boundary_is_inclusive() {
		let center = Point::new(600.0, 300.0);
		assert!(in_disk(Point::new(625.0, 300.0), center, 25.0));
		assert!(in_disk(Point::new(600.0, 275.0), center, 25.0));
		assert!(!in_disk(Point::new(625.5, 300.0), center, 25.0));
	}

	#[test]
	fn disk_contains_matches_in_disk() {
		let disk = Disk::new(Point::new(10.0, 10.0), 5.0);
		assert!(disk.contains(Point::new(13.0, 14.0)));
		assert!(!disk.contains(Point::new(14.0, 14.0)));
	}

	#[test]
	fn points_subtract_into_offsets() {
		let offset = Point::new(605.0, 310.0) - Point::new(600.0, 300.0);
		assert_eq!(offset, Point::new(5.0, 10.0));
		assert_eq!(Point::new(600.0, 300.0) + offset, Point::new(605.0, 310.0));
	}
}
