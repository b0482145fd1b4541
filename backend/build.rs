use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let embed_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    }

    // include_dir! needs the directory even when no frontend build exists yet.
    fs::create_dir_all(&embed_dir).unwrap();

    println!("cargo:rerun-if-changed=../frontend/dist");
}
