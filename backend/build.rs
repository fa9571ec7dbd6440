use std::fs;
use std::path::Path;

fn main() {
    let static_dir = Path::new("static");
    let frontend_dist = Path::new("../frontend/dist");

    if frontend_dist.exists() {
        let _ = fs::remove_dir_all(static_dir);
        fs::create_dir_all(static_dir).unwrap();
        fs_extra::dir::copy(
            frontend_dist,
            static_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        // The embedded storefront is optional during backend-only builds;
        // include_dir! still needs the directory to exist.
        fs::create_dir_all(static_dir.join("dist")).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
