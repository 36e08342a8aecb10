//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner shown by `--version`.
pub fn version_line(binary: &str) -> String {
    format!("{} {} ({} {})", binary, VERSION, BUILD_DATE, BUILD_COMMIT)
}
