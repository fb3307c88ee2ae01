//! Library components of the `clinic-import` command.

pub mod logging;
pub mod output;
pub mod template;
