pub mod clock;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod render_loop;
pub mod renderer;
pub mod ring;
pub mod scheduler;
pub mod shape;
pub mod spring;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use error::*;
pub use render_loop::*;
pub use renderer::*;
pub use ring::*;
pub use scheduler::*;
pub use shape::*;
pub use spring::*;
