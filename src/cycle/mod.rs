//! The deposit/withdraw cycle.

pub mod amount;
pub mod delay;
pub mod driver;

pub use amount::AmountRange;
pub use delay::{Delay, TokioDelay};
pub use driver::{remaining_loops, CycleDriver, RunSummary, WalletReport};
