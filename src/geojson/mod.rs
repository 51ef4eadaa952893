pub mod parser;

pub use parser::{load_zones, parse_zones};
