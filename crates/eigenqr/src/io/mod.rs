//! Plain-text input and output.
pub mod eigen_writer;
pub mod format;
pub mod matrix_reader;

pub use eigen_writer::write_eigenvalues;
pub use format::format_general;
pub use matrix_reader::read_matrix;
