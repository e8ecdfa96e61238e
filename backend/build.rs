use std::fs;
use std::path::Path;

/// Copies the trunk build of the frontend into `public/`, the directory the
/// server serves static assets from.
fn main() {
    let out_dir = Path::new("public");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        // With `copy_inside`, an existing `public/` would receive a nested
        // `dist/`; removing it first makes `public/` the copy itself.
        let _ = fs::remove_dir_all(out_dir);
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
