pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, info, nothing_found, stored};
pub use table::{snippet_table, SnippetRow};
pub use theme::{theme, Theme};
