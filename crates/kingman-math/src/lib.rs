//! Array primitives shared by the Kingman excursion samplers.

pub mod grid;
pub mod noise;
pub mod ranking;
