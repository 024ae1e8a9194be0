// Adapters layer: concrete Document implementations.

pub mod html_file;
pub mod memory;
pub mod stdout;
