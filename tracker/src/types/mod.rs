//! Value types shared by the resolver and the position estimator.

pub mod airport;
pub mod coordinate;

pub use airport::AirportCode;
pub use coordinate::{BoundingBox, GeoCoordinate};
