mod automated;
mod human;
pub use automated::*;
pub use human::*;
