//! A built-in street map for demos and smoke tests.

use gn_core::Grid;

use crate::{parse_grid_text, MapResult};

/// 10×16 city block: three east-west streets, four north-south streets,
/// water in the middle block, signal posts on three corners.
pub const DEMO_CITY: &str = "\
# start top-left, goal bottom-right
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1
1 3 0 0 0 5 0 0 0 0 6 0 0 0 0 1
1 0 1 1 1 0 1 1 2 2 0 1 1 1 0 1
1 0 1 1 1 0 1 1 2 2 0 1 1 1 0 1
1 0 1 1 1 7 1 1 2 2 0 1 1 1 0 1
1 6 0 0 0 5 0 0 0 0 5 0 0 0 0 1
1 0 1 1 1 0 1 1 1 1 7 1 1 2 0 1
1 0 1 1 1 0 1 1 1 1 0 1 1 2 0 1
1 0 0 0 0 6 0 0 0 0 5 0 0 0 4 1
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1
";

/// Parse [`DEMO_CITY`].
pub fn demo_city() -> MapResult<Grid> {
    parse_grid_text(DEMO_CITY)
}
