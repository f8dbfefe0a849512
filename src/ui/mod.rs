pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, empty, error, info, menu, section, success, summary_row, warn};
pub use progress::SampleProgress;
pub use table::{TableBuilder, render_table, stats_table};
pub use theme::{theme, Theme};
