// File: crates/chart-core/build.rs
// Summary: Build script; Skia's font manager on Windows needs advapi32 at link time.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
