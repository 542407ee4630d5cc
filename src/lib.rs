pub mod args;
pub mod cmdline;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod exits;
pub mod lang;
pub mod page;
pub mod select;
pub mod visuals;
