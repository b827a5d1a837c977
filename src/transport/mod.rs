/// Filesystem log transport.
pub mod fs;
