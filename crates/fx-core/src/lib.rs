pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod field;
pub mod pointer;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod tilt;
pub mod typing;

pub use config::*;
pub use error::*;
pub use field::*;
pub use pointer::*;
pub use reveal::*;
pub use scheduler::*;
pub use scroll::*;
pub use tilt::*;
pub use typing::*;
