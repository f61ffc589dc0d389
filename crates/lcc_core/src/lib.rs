//! LCC Core - decision engine for the loudness compliance checker
//!
//! This crate parses probe and loudness-measurement output, judges the
//! integrated loudness against EBU R128 or ATSC A/85, and plans the
//! corrective re-encode. It has no CLI dependencies.

pub mod config;
pub mod correction;
pub mod logging;
pub mod loudness;
pub mod models;
pub mod orchestrator;
pub mod probe;
pub mod report;
pub mod tools;

