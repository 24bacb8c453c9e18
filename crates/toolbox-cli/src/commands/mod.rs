//! Command implementations for toolbox-cli

pub mod list;
pub mod search;
pub mod show;
pub mod validate;

pub use list::{run_categories, run_list};
pub use search::run_search;
pub use show::run_show;
pub use validate::run_validate;
