//! Shared infrastructure for the cucumber suite

pub mod world;

#[allow(unused_imports)]
pub use world::LeadFormWorld;
