mod operation;
pub use operation::*;
mod io;
pub use io::*;

use std::path::Path;

/// Represents a database that provides whole-collection operations on records,
/// built upon the functionality provided by [`DatabaseOps`] and [`DatabaseIO`]
pub trait Database: DatabaseOps + DatabaseIO {
    /// The name of the Database
    const NAME: &str;

    /// Creates a new instance of [`Database`] with the specified base directory where files will be stored
    ///
    /// Nothing is touched on disk until the first write.
    fn new(dir: impl AsRef<Path>) -> Self;
}
