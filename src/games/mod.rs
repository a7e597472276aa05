//! Game implementations.

pub mod geodesic_y;

pub use geodesic_y::GeodesicYGame;
