//! Technical indicators for the kumo console.
//!
//! This crate provides the Ichimoku Cloud indicator and the rolling-window
//! primitives it is built on:
//! - Windowed extrema over a monotonic deque (O(n) total)
//! - Index shifts that displace a series forward or backward
//!
//! All outputs stay aligned with the input series; slots where a value
//! is not defined hold `None` instead of shortening the output.

pub mod ichimoku;
pub mod rolling;

pub use ichimoku::{Ichimoku, IchimokuCloud};
pub use rolling::{rolling_max, rolling_min, shift_backward, shift_forward};
