//! A watch face that shows the current time as a raw Unix epoch second
//! count, updated lazily to keep display writes (and power draw) down.

mod face;
mod logo;

pub use face::{FaceState, UnixClockFace};
