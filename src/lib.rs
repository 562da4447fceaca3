pub mod catalog;
pub mod cli;
pub mod color;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use catalog::{Catalog, Palette};
pub use color::{delta_e_2000, HexColor, LabColor};
pub use error::RecolorError;
pub use pipeline::{nearest, rewrite, rewrite_with_report};
