/// Line-delimited JSON file source implementation.
pub mod json_lines;
