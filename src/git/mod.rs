pub mod log;
pub mod repo;

pub use log::{parse_line, parse_lines, GitCommand, LogFile, LogSource};
pub use repo::GixRepository;
