pub mod clock;
pub mod controller;

pub use clock::Clock;
pub use controller::{Button, Controller, PressEdge};
