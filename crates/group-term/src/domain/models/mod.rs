mod error;
mod event;
mod input_field;
mod phase;
mod title;
mod viewport;

pub use error::*;
pub use event::*;
pub use input_field::*;
pub use phase::*;
pub use title::*;
pub use viewport::*;
