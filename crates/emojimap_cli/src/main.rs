//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `emojimap_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("emojimap_core ping={}", emojimap_core::ping());
    println!("emojimap_core version={}", emojimap_core::core_version());
}
