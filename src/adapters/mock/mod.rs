pub mod clock;
pub mod seed;

pub use clock::FixedClock;
