pub mod engine;
pub mod guard;

pub use engine::{HireEngine, TxMode};
