/// File system adapters
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, MANIFEST_FILENAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
