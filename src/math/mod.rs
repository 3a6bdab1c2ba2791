pub mod math_utils;

pub use math_utils::*;
