mod args;
mod console;
mod recording;
pub use args::*;
pub use console::*;
pub use recording::*;
