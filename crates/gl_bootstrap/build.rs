// build.rs
// Build script that stamps the crate with its build time for the debug log header

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Only rerun when the script itself or the override changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    // Reproducible builds pin the stamp through SOURCE_DATE_EPOCH
    let stamp = match env::var("SOURCE_DATE_EPOCH").ok().and_then(|s| s.parse::<i64>().ok()) {
        Some(secs) => secs,
        None => match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            Err(e) => {
                eprintln!("warning: System clock is before the Unix epoch: {}", e);
                0
            }
        },
    };

    println!("cargo:rustc-env=GL_BOOTSTRAP_BUILD_EPOCH={}", stamp);
}
