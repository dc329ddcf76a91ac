//! Domain models for the veterinary advice engine.

mod advice;
mod knowledge;
mod medicine;
mod query;
mod species;
mod symptom;

pub use advice::*;
pub use knowledge::*;
pub use medicine::*;
pub use query::*;
pub use species::*;
pub use symptom::*;
