//! Grade resolution for 2010 BTEC National unit results.

#![deny(unsafe_code)]

pub mod pipeline;
pub mod resolver;

pub use pipeline::{Failure, GradeReport, Outcome, Stage, calculate, calculate_with};
pub use resolver::GradeResolver;
