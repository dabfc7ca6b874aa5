mod fixture;
mod streak;

pub use fixture::*;
pub use streak::*;
