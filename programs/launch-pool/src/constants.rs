// Launch Pool Program Constants

pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const SOL_VAULT_SEED: &[u8] = b"sol_vault";
pub const CONFIG_SEED: &[u8] = b"config";
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Conventional graduation bar: 85 SOL of curve custody.
// Deployments pass their own value to init_config.
pub const DEFAULT_GRADUATION_THRESHOLD: u64 = 85_000_000_000;
