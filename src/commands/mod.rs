//! Command implementations for the skill installer CLI

pub mod completions;
pub mod helpers;
pub mod info;
pub mod init;
pub mod list;
pub mod update;
pub mod versions;
