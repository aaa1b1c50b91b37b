//! Control open and close times for ACP-sanctioned brevets.
//!
//! Follows the rules published at <https://rusa.org/octime_alg.html>: the
//! route is split into speed categories, each control's opening time uses
//! the fast limit of every category it passes through and its closing time
//! uses the slow limit, and a handful of fixed overrides apply on top.
//!
//! ```rust
//! use brevets::{close_time, open_time};
//!
//! let start = "2017-01-01T00:00:00-08:00";
//! assert_eq!(open_time(200.0, 200.0, start)?, "2017-01-01T05:53:00-08:00");
//! assert_eq!(close_time(200.0, 200.0, start)?, "2017-01-01T13:30:00-08:00");
//! # Ok::<(), brevets::BrevetError>(())
//! ```

pub mod accumulator;
pub mod calculator;
pub mod categories;
pub mod config;
pub mod errors;
pub mod exceptions;
pub mod models;
pub mod rounding;
pub mod schedule;
pub mod speed_table;
pub mod timestamps;

pub use calculator::{ControlTimeCalculator, close_time, open_time};
pub use config::CalculatorConfig;
pub use errors::BrevetError;
pub use models::BrevetDistance;
pub use rounding::{MinuteRounding, RoundedOffset};
pub use schedule::{ControlSchedule, ControlWindow};
pub use speed_table::{Bound, SpeedTable, Threshold};
