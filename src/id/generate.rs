use clap::ValueEnum;
use rand::{
    rngs::{SmallRng, ThreadRng},
    Rng, SeedableRng,
};
use serde::Deserialize;

use super::checksum::check_digit;
use super::format::group_digits;
use super::ID_LENGTH;

/// First-digit policy for generated IDs.
///
/// Issued IDs start with a person-category digit 1-8, so `Category` is the
/// default. `Any` draws the full 0-9 range; such IDs still carry a correct
/// check digit and always pass validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FirstDigitPolicy {
    #[default]
    Category,
    Any,
}

/// Generates one syntactically valid Thai national ID: 12 random digits plus
/// the computed check digit, using the default first-digit policy.
pub fn generate_thai_id<T: rand::RngCore>(rng: &mut T) -> String {
    generate_thai_id_with(rng, FirstDigitPolicy::Category)
}

pub fn generate_thai_id_with<T: rand::RngCore>(rng: &mut T, policy: FirstDigitPolicy) -> String {
    let mut digits = [0u8; ID_LENGTH];
    digits[0] = match policy {
        FirstDigitPolicy::Category => rng.random_range(1..=8),
        FirstDigitPolicy::Any => rng.random_range(0..=9),
    };
    for digit in &mut digits[1..ID_LENGTH - 1] {
        *digit = rng.random_range(0..=9);
    }
    digits[ID_LENGTH - 1] = check_digit(&digits[..ID_LENGTH - 1]);

    let mut id = String::with_capacity(ID_LENGTH);
    for &digit in &digits {
        id.push((digit + b'0') as char);
    }
    id
}

/// Generates an ID already rendered in the 1-4-5-2-1 card layout. Stripping
/// the separators reproduces the bare 13 digits exactly.
pub fn generate_formatted_thai_id<T: rand::RngCore>(rng: &mut T) -> String {
    group_digits(&generate_thai_id(rng))
}

/// Generates `count` independent IDs. No uniqueness guarantee; bounding
/// `count` is the caller's policy, and 0 simply yields an empty vector.
pub fn generate_thai_ids<T: rand::RngCore>(rng: &mut T, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_thai_id(rng)).collect()
}

/// Stateful generator owning its RNG and first-digit policy.
///
/// `new` seeds from the thread RNG; `seeded` pins the stream so repeated runs
/// reproduce the same IDs.
pub struct ThaiIdGenerator {
    rng: SmallRng,
    policy: FirstDigitPolicy,
}

impl ThaiIdGenerator {
    pub fn new(policy: FirstDigitPolicy) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(ThreadRng::default().random()),
            policy,
        }
    }

    pub fn seeded(seed: u64, policy: FirstDigitPolicy) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            policy,
        }
    }

    pub fn generate(&mut self) -> String {
        generate_thai_id_with(&mut self.rng, self.policy)
    }

    pub fn generate_formatted(&mut self) -> String {
        group_digits(&self.generate())
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}
