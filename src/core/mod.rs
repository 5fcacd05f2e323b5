pub mod command;
pub mod completer;
pub mod flags;
pub mod options;
pub mod reader;
pub mod registry;
