//! Command-line entry point for `skillport`.
//!
//! All behavior lives in the library half of this crate so it can be tested
//! without spawning the binary.

fn main() -> anyhow::Result<()> {
    skillport::run()
}
