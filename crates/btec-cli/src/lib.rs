//! CLI library components for the BTEC Nationals grade calculator.

pub mod banner;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod summary;
