//! The snake simulation.
//!
//! A fixed 20x20 grid, one snake steered by buffered directional input,
//! one food cell, and a fixed-cadence step loop. State lives in
//! [`types::SnakeGame`]; transitions live in [`logic`].

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
