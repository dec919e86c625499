#![warn(non_snake_case)]

pub mod config;
pub mod graph;
pub mod input;
pub mod io;
pub mod options;
pub mod repair;
pub mod report;
pub mod util;

pub use repair::{RepairError, RepairOptions, RepairRun, TreeRepair, repair_first};
pub use report::{EdgeRecord, RepairReport};
