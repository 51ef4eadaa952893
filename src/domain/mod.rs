pub mod point;
pub mod registry;
pub mod zone;
pub mod zone_set;

pub use point::Point;
pub use zone::{Geometry, Ring, ZonePolygon};
pub use zone_set::{LoadReport, Zone, ZoneSet};
