pub mod core;
pub mod generate;

#[cfg(test)]
mod tests;

pub use self::core::*;
pub use self::generate::*;
