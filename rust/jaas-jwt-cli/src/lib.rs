#[macro_use]
extern crate tracing;

pub mod native;
