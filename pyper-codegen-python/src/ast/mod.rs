//! Python syntax elements.
//!
//! Block constructs ([`Class`], [`Function`], [`If`]) implement
//! [`pyper_codegen::Block`] and use [`Pass`] as the body of an empty block.

mod class;
mod conditional;
mod decorator;
mod function;
mod imports;
mod params;
mod statements;

pub use class::Class;
pub use conditional::{Alternative, Elif, Else, If};
pub use decorator::Decorator;
pub use function::Function;
pub use imports::Imports;
pub use params::Parameters;
pub use statements::{Assign, Comment, Docstring, Pass, Return};
