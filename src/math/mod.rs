mod lerp;
mod slerp;

pub use lerp::lerp;
pub use slerp::slerp;
