pub mod config;
pub mod execute;
pub mod utils;
pub mod visibility;

pub use config::{load_config, show_config};
pub use execute::execute;
pub use utils::parse_row;
pub use visibility::visibility;
