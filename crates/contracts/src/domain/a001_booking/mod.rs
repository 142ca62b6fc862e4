pub mod aggregate;
mod seed;

pub use aggregate::*;
