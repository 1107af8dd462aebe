// Application layer - validation and orchestration between a front end and the record store

mod error;
mod service;
mod validation;

pub use error::*;
pub use service::*;
pub use validation::*;
