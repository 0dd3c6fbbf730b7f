pub mod axis;
pub mod build_tool;
pub mod distro;
pub mod error;
pub mod exclude;
pub mod macros;
pub mod matrix;
pub mod order;
pub mod tags;
pub mod validate;
pub mod variant;

pub use axis::*;
pub use build_tool::*;
pub use distro::*;
pub use error::*;
pub use exclude::*;
pub use matrix::*;
pub use order::*;
pub use tags::*;
pub use validate::*;
pub use variant::*;
