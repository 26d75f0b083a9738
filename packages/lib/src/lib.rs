//! Expansion logic behind the `proxy-fn` procedural macros.

pub mod callable;
mod utils;
