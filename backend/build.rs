use std::fs;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const TRUNK_DIST: &str = "../frontend/dist";
const EMBED_ROOT: &str = "static";

/// Mirrors the Trunk bundle into `static/dist` for `include_dir!`.
fn refresh_bundle(dist: &Path, embed_root: &Path) -> fs_extra::error::Result<()> {
    if embed_root.exists() {
        fs::remove_dir_all(embed_root)?;
    }
    fs::create_dir_all(embed_root)?;
    let options = CopyOptions::new().overwrite(true).copy_inside(true);
    fs_extra::dir::copy(dist, embed_root, &options)?;
    Ok(())
}

fn main() {
    let dist = Path::new(TRUNK_DIST);
    let embed_root = Path::new(EMBED_ROOT);

    if dist.exists() {
        if let Err(e) = refresh_bundle(dist, embed_root) {
            panic!("could not copy {} into {}: {}", TRUNK_DIST, EMBED_ROOT, e);
        }
    } else {
        println!("cargo:warning=frontend bundle not found at {}; serving an empty site", TRUNK_DIST);
    }

    // The embedded directory must exist even before the first Trunk build.
    if let Err(e) = fs::create_dir_all(embed_root.join("dist")) {
        panic!("could not create {}/dist: {}", EMBED_ROOT, e);
    }
    println!("cargo:rerun-if-changed={}", TRUNK_DIST);
}
