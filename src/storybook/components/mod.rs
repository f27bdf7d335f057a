pub mod action_log;
pub mod footer;
pub mod header;

pub use action_log::ActionLog;
pub use footer::Footer;
pub use header::Header;
