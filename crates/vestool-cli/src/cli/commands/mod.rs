//! CLI command handlers, one file per command.

mod categories;
mod classify;
mod completions;
mod list;
mod resolve;
mod search;
mod show;
mod versions;

pub use categories::run_categories;
pub use classify::run_classify;
pub use completions::{run_completions, run_man};
pub use list::run_list;
pub use resolve::run_resolve;
pub use search::run_search;
pub use show::run_show;
pub use versions::run_versions;
