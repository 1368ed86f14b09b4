//! cmake-cache - Typed CMake cache model
//!
//! Models CMake's persistent variable cache: the five recognized value
//! types, CMake's exact truthy/falsey boolean grammar, and an
//! insertion-ordered collection of uniquely named entries that serializes
//! deterministically to `-DNAME[:TYPE]=VALUE` arguments.
//!
//! Invoking CMake itself is out of scope; callers take [`Cache::args`] and
//! append it to their own invocation.
//!
//! ```
//! use cmake_cache::{Cache, ValueType};
//!
//! # fn main() -> cmake_cache::CacheResult<()> {
//! let mut cache = Cache::new();
//! cache.set("CMAKE_BUILD_TYPE", "Release")?;
//! cache.set_typed("BUILD_SHARED_LIBS", "OFF", ValueType::Bool)?;
//! cache.set("CMAKE_OSX_ARCHITECTURES", ["arm64", "x86_64"])?;
//!
//! assert_eq!(cache.args(), [
//!     "-DCMAKE_BUILD_TYPE=Release",
//!     "-DBUILD_SHARED_LIBS:BOOL=FALSE",
//!     "-DCMAKE_OSX_ARCHITECTURES:STRING=arm64;x86_64",
//! ]);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod entry;
pub mod error;
pub mod value;
pub mod value_type;

pub use cache::Cache;
pub use entry::CacheEntry;
pub use error::{CacheError, CacheResult};
pub use value::{Scalar, Value};
pub use value_type::ValueType;
