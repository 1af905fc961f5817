// Baked in by build.rs, "unknown" outside a git checkout.
pub const GIT_DESCRIBE: &str = env!("GIT_DESCRIBE");
pub const GIT_HASH: &str = env!("GIT_HASH");
