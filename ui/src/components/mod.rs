pub mod dropdown;
pub mod footer;

pub use dropdown::*;
pub use footer::*;
