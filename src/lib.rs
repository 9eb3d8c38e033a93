//! sheetclip
//!
//! Bootstrap and command line front-end for the sheet clipboard engine.

pub mod bootstrap;
pub mod cli;
