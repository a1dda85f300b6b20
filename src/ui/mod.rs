pub mod icons;
pub mod output;
pub mod prompt;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{acknowledge_line, banner_line, error_line, retry_line};
pub use prompt::Console;
pub use table::render_table;
pub use theme::{theme, Theme};
