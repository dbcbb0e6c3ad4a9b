pub mod games;
pub mod rankings;
pub mod stats;
