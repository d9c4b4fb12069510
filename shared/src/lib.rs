pub mod constants;
pub mod error;
pub mod host;
pub mod imports;
pub mod locale;
pub mod time_formatter;
pub mod types;
pub mod utils;
pub mod widget;
