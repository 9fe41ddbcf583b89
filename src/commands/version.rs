//! version command: package name, version and build profile

use crate::error::Result;

/// Text printed by `awsutil version`
fn describe() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!(
        "{} {} ({profile} build)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

pub fn run() -> Result<()> {
    println!("{}", describe());
    Ok(())
}
