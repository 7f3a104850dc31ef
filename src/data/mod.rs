//! Synthetic student records

mod generator;
mod schema;

pub use generator::*;
pub use schema::*;
