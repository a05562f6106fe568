use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only Apple targets have the Accessibility framework to link against
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "macos" {
        println!("cargo:rustc-link-lib=framework=ApplicationServices");
    }

    // Set macOS deployment target
    println!("cargo:rustc-env=MACOSX_DEPLOYMENT_TARGET=12.0");
}
