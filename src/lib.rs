pub mod error;
pub mod fib;
pub mod harness;

pub use error::HarnessError;
pub use fib::{fibonacci, fibonacci_tail};
pub use harness::{measure, run, write_report, Measurement, DEFAULT_N};
