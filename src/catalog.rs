//! Sample identifier pools used to parametrize requests.
//!
//! Every pool is a fixed, non-empty slice. Selection is uniform and
//! independent per call; nothing here is seeded.

use rand::Rng;

/// User fetched by `get_user` on every invocation.
pub const FIXED_USER_ID: &str = "761c3b71-a9ce-4b6f-a691-ac84743ec508";

/// Users whose purchase history is requested by `get_user_history`.
pub const HISTORY_USER_IDS: &[&str] = &[
    "761c3b71-a9ce-4b6f-a691-ac84743ec508",
    "123e4567-e89b-12d3-a456-426614174000",
    "987e6543-e21b-12d3-a456-426614174999",
    "456e7890-e21b-12d3-a456-426614174111",
];

/// Products fetched by `get_single_product`.
pub const PRODUCT_IDS: &[&str] = &[
    "7824407a-2768-4f8b-ae0d-82cf56348545",
    "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d",
];

/// Brand filter values. The empty string exercises the "no brand" branch.
pub const BRANDS: &[&str] = &["Nike", "Adidas", "Puma", "Reebok", ""];

/// Category filter values. The empty string exercises the "no category" branch.
pub const CATEGORIES: &[&str] = &["Sneakers", "Boots", "Running", "Casual", ""];

/// Name sent with every registration.
pub const REGISTER_NAME: &str = "Load Test User";

/// Password sent with every registration and login.
pub const REGISTER_PASSWORD: &str = "password";

/// Age sent with every registration.
pub const REGISTER_AGE: u32 = 30;

/// Smallest numeric suffix in generated registration emails.
pub const EMAIL_SUFFIX_MIN: u32 = 1;
/// Largest numeric suffix in generated registration emails (inclusive).
pub const EMAIL_SUFFIX_MAX: u32 = 99_999;

/// Pick one entry of `pool` uniformly at random.
///
/// `pool` must be non-empty; every pool in this module is.
pub fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

/// Registration email with a random suffix, e.g. `loadtest_4821@example.com`.
///
/// Suffixes collide eventually; the backend rejecting a duplicate is an
/// ordinary failed request in the run's metrics.
pub fn registration_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix = rng.random_range(EMAIL_SUFFIX_MIN..=EMAIL_SUFFIX_MAX);
    format!("loadtest_{suffix}@example.com")
}
