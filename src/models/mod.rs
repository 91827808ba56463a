pub mod controls;
pub mod grid;
pub mod layout;
pub mod table;

pub use controls::{Control, CoordinateMap, ScreenPoint};
pub use table::ResultTable;
