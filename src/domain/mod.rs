mod money;
mod summary;
mod transaction;

pub use money::*;
pub use summary::*;
pub use transaction::*;
