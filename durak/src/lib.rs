pub use cards::*;
pub use cards_set::*;
pub use draw_pile::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use stack::*;
pub use strategies::*;
pub use strategy::*;
pub use turn::*;
pub use turn_queue::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod cards_set;
mod draw_pile;
mod errors;
mod game;
mod player;
mod stack;
mod strategies;
mod strategy;
mod turn;
mod turn_queue;
