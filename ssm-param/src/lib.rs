pub mod cli;
pub mod configs;
pub mod error;
pub mod parameter_store;
pub mod runner;
pub mod test_stub;
pub mod transport;

pub use configs::RunConfig;
pub use error::{ParamError, RetrievalErrorKind};
pub use runner::run;
