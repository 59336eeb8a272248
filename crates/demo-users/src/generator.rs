//! User generation from the static catalogue.
//!
//! Gender and bucket are fixed by position; first name, surname and role are
//! drawn uniformly with replacement. Nothing is deduplicated, so two records
//! may share a username.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::catalogue::{Bucket, ROLES};
use crate::error::GenerationError;
use crate::user::{DemoUser, Gender};

/// Number of users in a generated dataset.
pub const DATASET_SIZE: usize = 100;

/// Generates the demo dataset using the thread-local RNG.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if a lookup table is empty.
///
/// # Example
///
/// ```
/// use demo_users::{DATASET_SIZE, generate_demo_users};
///
/// let users = generate_demo_users().expect("generation succeeds");
/// assert_eq!(users.len(), DATASET_SIZE);
/// ```
pub fn generate_demo_users() -> Result<Vec<DemoUser>, GenerationError> {
    generate_demo_users_with_rng(&mut rand::rng())
}

/// Generates the demo dataset drawing from `rng`.
///
/// The record at position `i` is:
///
/// - male when `i` is even, female otherwise
/// - drawn from [`Bucket::for_position`]`(i)`
/// - assigned one role from [`ROLES`]
///
/// A seeded RNG yields identical datasets across runs.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if a lookup table is empty.
///
/// # Example
///
/// ```
/// use demo_users::{Gender, generate_demo_users_with_rng};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let users = generate_demo_users_with_rng(&mut rng).expect("generated");
///
/// assert_eq!(users.first().map(|u| u.gender()), Some(Gender::Male));
/// ```
pub fn generate_demo_users_with_rng<R>(rng: &mut R) -> Result<Vec<DemoUser>, GenerationError>
where
    R: Rng + ?Sized,
{
    let mut users = Vec::with_capacity(DATASET_SIZE);

    for index in 0..DATASET_SIZE {
        users.push(generate_single_user(rng, index)?);
    }

    debug!(count = users.len(), "generated demo users");
    Ok(users)
}

/// Generates the user at `index`.
fn generate_single_user<R>(rng: &mut R, index: usize) -> Result<DemoUser, GenerationError>
where
    R: Rng + ?Sized,
{
    let gender = Gender::for_position(index);
    let bucket = Bucket::for_position(index);
    let nationality = bucket.nationality();

    let first_name = pick(
        rng,
        nationality.first_names(gender),
        nationality.pool_label(gender),
    )?;
    let last_name = pick(rng, bucket.surnames(), bucket.surname_pool_label())?;
    let role = pick(rng, &ROLES, "roles")?;

    Ok(DemoUser::new(first_name, last_name, gender, role))
}

/// Draws one entry uniformly from `pool`.
fn pick<'a, R>(rng: &mut R, pool: &[&'a str], label: &'static str) -> Result<&'a str, GenerationError>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyPool { pool: label })
}
