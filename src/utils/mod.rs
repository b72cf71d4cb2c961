pub mod file_utils;
pub mod format_utils;
pub mod log_utils;

pub use file_utils::load_report;
pub use format_utils::format_bytes;
pub use log_utils::init_logging;
