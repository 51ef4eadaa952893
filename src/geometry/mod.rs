pub mod compass;
pub mod sphere;

pub use compass::{Direction, bearing_to_compass};
pub use sphere::{EARTH_RADIUS_M, great_circle_distance, initial_bearing};
