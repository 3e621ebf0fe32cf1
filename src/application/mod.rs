mod dispatcher;
mod error;
mod statement;

pub use dispatcher::*;
pub use error::*;
pub use statement::*;
