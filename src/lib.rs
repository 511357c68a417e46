//! Gallery - a captioned photo gallery kept on the local machine
//!
//! Photos are saved as entries of one newest-first gallery document in a
//! key-value slot. Capture, dictation and sign-in are provided by the
//! platform and reach the gallery through small traits.

pub mod capture;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod session;
pub mod storage;
