pub mod types;
mod create;
mod manage;
mod views;

pub use types::*;
