//! Integration test modules.

mod render;
mod sequence_files;
