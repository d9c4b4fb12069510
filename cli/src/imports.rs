pub use ::std::cell::RefCell;
pub use ::std::env;
pub use ::std::io;
pub use ::std::path::PathBuf;
pub use ::transitous_shared::constants::*;
pub use ::transitous_shared::error::*;
pub use ::transitous_shared::host::*;
pub use ::transitous_shared::imports::*;
pub use ::transitous_shared::locale::*;
pub use ::transitous_shared::time_formatter::*;
pub use ::transitous_shared::types::*;
pub use ::transitous_shared::utils::*;
pub use ::transitous_shared::widget::*;
