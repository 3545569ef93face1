pub mod jam;
pub mod strings;
pub mod tilt;
pub mod water;
