//! Static landing page and its assets.
//!
//! Everything under the public directory is served as-is; `/` resolves to
//! `index.html`. The directory is filled from the frontend's trunk build by
//! `build.rs`.

use actix_files::Files;
use std::path::Path;

const INDEX: &str = "index.html";

/// Mounts the public directory at `/`. Register it after every API scope,
/// since it matches all remaining paths.
pub fn configure(public_dir: &Path) -> Files {
    Files::new("/", public_dir).index_file(INDEX)
}
