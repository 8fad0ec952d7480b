//! Domain models for the Crop Advisor

mod conditions;
mod crop;
mod recommendation;
mod region;
mod soil;
mod weather;

pub use conditions::*;
pub use crop::*;
pub use recommendation::*;
pub use region::*;
pub use soil::*;
pub use weather::*;
