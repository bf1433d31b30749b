mod book_filesystem;
mod container_marker;
mod jupyter_book_command;

pub use book_filesystem::collect_update_candidates;
pub use container_marker::{CONTAINER_MARKER, MarkerFileContainerCheck};
pub use jupyter_book_command::{JUPYTER_BOOK_PROGRAM, JupyterBookCommand};
