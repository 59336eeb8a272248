//! Fabricated user records for seeding a demo identity provider.
//!
//! This crate produces a fixed-size dataset of believable user accounts
//! (names, username, email, gender and one realm role) and renders it as
//! JSON suitable for a Keycloak realm import.
//!
//! # Overview
//!
//! - Gender alternates by position, starting with male
//! - Nationality and surname pool cycle through four buckets by position
//! - First name, surname and role are drawn uniformly at random
//! - Usernames are not deduplicated; collisions are possible
//!
//! # Example
//!
//! ```
//! use demo_users::{DATASET_SIZE, generate_demo_users, render_users_json};
//!
//! let users = generate_demo_users().expect("generation succeeds");
//! let json = render_users_json(&users).expect("rendering succeeds");
//!
//! assert_eq!(users.len(), DATASET_SIZE);
//! assert!(json.starts_with('['));
//! ```

mod catalogue;
mod error;
mod generator;
mod output;
mod user;

pub use catalogue::{Bucket, Nationality, ROLES};
pub use error::{GenerationError, OutputError};
pub use generator::{DATASET_SIZE, generate_demo_users, generate_demo_users_with_rng};
pub use output::{render_users_json, write_users_json};
pub use user::{DemoUser, EMAIL_DOMAIN, Gender, username_for};
