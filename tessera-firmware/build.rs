//! Build script for tessera-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Embeds the build timestamp as the boot wall-clock epoch

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // The board has no RTC; time-of-day starts from the moment the
    // firmware was built and advances with uptime.
    File::create(out_dir.join("epoch.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const BUILD_EPOCH: i64 = {};\n",
            chrono::Utc::now().timestamp()
        ))
        .unwrap();

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
