pub mod classify;
pub mod config;
pub mod findings;
pub mod keywords;
pub mod model;
pub mod names;
pub mod params;
pub mod types;

mod entities;
mod extensions;
mod functions;
mod requirements;

pub use functions::is_standard_method;
