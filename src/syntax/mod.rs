//! Output side of the pipeline: canonical source printing and tree dumps
pub mod formatter;
pub mod sexpr;

pub use formatter::{FormatOptions, format, format_program};
pub use sexpr::{expr_to_sexpr, tla_to_sexpr, to_sexpr};
