//! `paydash` - A terminal dashboard of Canadian paycheck-to-paycheck statistics
//!
//! This library provides the static datasets, the tab view state, the
//! declarative screen tree built from that state, and a ratatui host that
//! draws it interactively or headlessly.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod panels;
pub mod screen;
pub mod theme;
pub mod tui;
pub mod view;

pub use chart::{Chart, ChartId, ChartKind, Tooltip, TooltipFormat};
pub use config::Config;
pub use data::Dataset;
pub use error::{Error, Result};
pub use logging::{init_logging, LogTarget, Verbosity};
pub use screen::{Dashboard, Screen};
pub use view::{Tab, ViewState};
