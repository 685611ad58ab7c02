//! Domain models for the AutoParts Manager dashboard

mod alert;
mod import;
mod stock;
mod transaction;

pub use alert::*;
pub use import::*;
pub use stock::*;
pub use transaction::*;
