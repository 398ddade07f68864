pub mod formatter;

pub use formatter::PathFormatter;
