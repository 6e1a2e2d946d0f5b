pub mod common;
pub mod shootout;

pub use shootout::{run_shootout, SessionExit};
