#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Lists directories, creates directories and checks whether paths exist, with the same observable
//! behavior on every platform.
//!
//! The crate exists so that calling code never has to branch on the host operating system for
//! these three basic filesystem queries. Exactly one backend is compiled into each build:
//!
//! * **Windows** enumerates with `FindFirstFileW`/`FindNextFileW`.
//! * **Linux and macOS** enumerate with `opendir`/`readdir`.
//! * **Every other target** (and Miri) uses the portable `std::fs` API.
//!
//! # Contract
//!
//! The default operations deliberately collapse failures:
//!
//! * [`list_directory`] returns an empty vector if the path does not exist, is not a directory,
//!   cannot be read or is longer than the backend accepts. Listing is not recursive and the
//!   order of entries is whatever the platform yields.
//! * [`create_directory`] returns `true` if the directory exists afterwards, whether it was just
//!   created or was already there. Parent directories are never created.
//! * [`path_exists`] returns `false` both for missing and for inaccessible paths.
//!
//! Entries whose name begins with a dot are omitted from listings on every platform (including
//! the `.` and `..` pseudo-entries). Use [`Filesystem::builder()`] to narrow this to only the
//! pseudo-entries, or to adjust the legacy listing path length ceiling. The `try_` variants on
//! [`Filesystem`] report the reason for a failure as an [`Error`].
//!
//! # Example
//!
//! ```
//! let scratch = std::env::temp_dir().join("basic_fs_doc_example");
//!
//! assert!(basic_fs::create_directory(&scratch));
//! // Creating it again is not an error.
//! assert!(basic_fs::create_directory(&scratch));
//! assert!(basic_fs::path_exists(&scratch));
//!
//! for entry in basic_fs::list_directory(std::env::temp_dir()) {
//!     println!("{:?} (directory: {})", entry.name(), entry.is_directory());
//! }
//! # std::fs::remove_dir(&scratch).unwrap();
//! ```
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.

mod pal;

mod directory_entry;
mod dotfile_policy;
mod error;
mod filesystem;
mod filesystem_builder;
mod functions;

pub use directory_entry::*;
pub use dotfile_policy::*;
pub use error::*;
pub use filesystem::*;
pub use filesystem_builder::*;
pub use functions::*;
