//! Authentication: bearer tokens and password hashing.

mod claims;
mod errors;
pub mod passwords;
mod token;

pub use claims::*;
pub use errors::*;
pub use token::*;
