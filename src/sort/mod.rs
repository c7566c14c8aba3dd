pub mod compare;
pub mod core;
pub mod error;
pub mod insertion;
pub mod merge;
pub mod timsort;


pub use self::compare::*;
pub use self::core::*;
pub use self::error::*;
pub use self::insertion::*;
pub use self::merge::*;
pub use self::timsort::*;
