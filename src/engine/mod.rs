#[cfg(feature = "cbor")]
pub mod cbordb;
#[cfg(feature = "cbor")]
pub use cbordb::*;

#[cfg(feature = "json")]
pub mod jsondb;
#[cfg(feature = "json")]
pub use jsondb::*;

#[cfg(feature = "memory")]
pub mod memorydb;
#[cfg(feature = "memory")]
pub use memorydb::*;
