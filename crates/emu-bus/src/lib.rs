//! Bus contract and shared timing types for CPU emulation.
//!
//! The CPU core never owns memory or peripherals. Everything it touches
//! goes through the [`Bus`] trait; hosts decide what lives behind it.

mod bus;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use ticks::Ticks;
