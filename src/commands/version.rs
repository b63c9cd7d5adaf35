//! Version command implementation

use crate::error::Result;
use crate::platform::PlatformRegistry;

/// Run version command
pub fn run() -> Result<()> {
    println!("skillset {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!(
        "  Built-in platforms: {}",
        PlatformRegistry::default().ids().join(", ")
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
