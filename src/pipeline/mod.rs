pub mod matcher;
pub mod rewrite;
pub mod scan;

pub use matcher::{nearest, Match, Matcher};
pub use rewrite::{rewrite, rewrite_with_report, Rewrite};
pub use scan::{scan, ColorToken};
