//! High-level operations shared by the CLI and the interactive session
//!
//! - [`batch`]: install selected / install all over a [`CatalogAccess`](crate::catalog::CatalogAccess)
//! - [`installed`]: what is present in a platform's target directory
//! - [`prompt`]: global prompt update and diff

pub mod batch;
pub mod installed;
pub mod prompt;

pub use batch::{install_all, install_batch, install_selected};
