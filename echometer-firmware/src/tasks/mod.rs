//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod report;
pub mod scan;

pub use report::report_task;
pub use scan::{scan_task, BoardSensor, ScanConfig};
