//! # Scanview Common
//!
//! Models shared by the interpreter (`scanview-core`) and the terminal front end
//! (`scanview-cli`).
//!
//! * **[`phase`]**: the stages of a scan and the literal markers announcing them.
//! * **[`records`]**: hosts, open ports and services rebuilt from the scan log.
//! * **[`network`]**: IPv4 helpers used when grouping and labelling results.
//! * **[`config`]**: runtime settings derived from the command line.

pub mod config;
pub mod network;
pub mod phase;
pub mod records;
