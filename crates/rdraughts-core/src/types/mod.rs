//! 基本型

mod color;
mod moves;
mod square;
mod value;
mod variant;

pub use color::Color;
pub use moves::Move;
pub use square::Square;
pub use value::Value;
pub use variant::Variant;
