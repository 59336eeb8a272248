//! Static lookup tables for user generation.
//!
//! Names are partitioned on two axes. First names depend on nationality and
//! gender; surnames depend on the bucket a position falls into. Buckets cycle
//! through the two nationalities twice, each time with a different surname
//! pool.

use crate::user::Gender;

/// Realm roles a generated user can be assigned.
pub const ROLES: [&str; 10] = [
    "admin",
    "editor",
    "viewer",
    "developer",
    "analyst",
    "support",
    "manager",
    "auditor",
    "operator",
    "guest",
];

const MEXICAN_MALE: [&str; 10] = [
    "Juan",
    "Carlos",
    "Pedro",
    "Diego",
    "Miguel",
    "Alejandro",
    "Luis",
    "Jorge",
    "Raul",
    "Fernando",
];

const MEXICAN_FEMALE: [&str; 10] = [
    "Maria",
    "Linda",
    "Laura",
    "Sofia",
    "Ana",
    "Carmen",
    "Isabel",
    "Patricia",
    "Veronica",
    "Martha",
];

const US_MALE: [&str; 10] = [
    "John", "Michael", "David", "Chris", "James", "Robert", "Daniel", "Paul", "Mark", "Steven",
];

const US_FEMALE: [&str; 10] = [
    "Emily",
    "Sarah",
    "Olivia",
    "Jessica",
    "Amanda",
    "Nicole",
    "Laura",
    "Elizabeth",
    "Michelle",
    "Rachel",
];

const MEXICAN_SURNAMES_A: [&str; 10] = [
    "Garcia",
    "Martinez",
    "Rodriguez",
    "Lopez",
    "Hernandez",
    "Gonzalez",
    "Perez",
    "Sanchez",
    "Ramirez",
    "Torres",
];

const US_SURNAMES_A: [&str; 10] = [
    "Smith",
    "Johnson",
    "Brown",
    "Jones",
    "Miller",
    "Davis",
    "Garcia",
    "Rodriguez",
    "Martinez",
    "Hernandez",
];

const MEXICAN_SURNAMES_B: [&str; 10] = [
    "Martinez", "Lopez", "Gonzalez", "Perez", "Sanchez", "Ramirez", "Torres", "Flores", "Rivera",
    "Gomez",
];

const US_SURNAMES_B: [&str; 10] = [
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
    "Martinez",
];

/// Nationality axis of the first-name pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nationality {
    /// Spanish given names common in Mexico.
    Mexican,
    /// English given names common in the United States.
    UnitedStates,
}

impl Nationality {
    /// Returns the first-name pool for this nationality and `gender`.
    ///
    /// # Examples
    ///
    /// ```
    /// use demo_users::{Gender, Nationality};
    ///
    /// let names = Nationality::Mexican.first_names(Gender::Male);
    /// assert!(names.contains(&"Juan"));
    /// ```
    #[must_use]
    pub const fn first_names(self, gender: Gender) -> &'static [&'static str] {
        match (self, gender) {
            (Self::Mexican, Gender::Male) => &MEXICAN_MALE,
            (Self::Mexican, Gender::Female) => &MEXICAN_FEMALE,
            (Self::UnitedStates, Gender::Male) => &US_MALE,
            (Self::UnitedStates, Gender::Female) => &US_FEMALE,
        }
    }

    /// Name of the first-name pool for `gender`, used in diagnostics.
    #[must_use]
    pub(crate) const fn pool_label(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Self::Mexican, Gender::Male) => "mexican-male",
            (Self::Mexican, Gender::Female) => "mexican-female",
            (Self::UnitedStates, Gender::Male) => "united-states-male",
            (Self::UnitedStates, Gender::Female) => "united-states-female",
        }
    }
}

/// Nationality and surname-pool grouping selected by position modulo four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Position `i` with `i mod 4 == 0`.
    MexicanA,
    /// Position `i` with `i mod 4 == 1`.
    UnitedStatesA,
    /// Position `i` with `i mod 4 == 2`.
    MexicanB,
    /// Position `i` with `i mod 4 == 3`.
    UnitedStatesB,
}

impl Bucket {
    /// Returns the bucket for the record at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use demo_users::Bucket;
    ///
    /// assert_eq!(Bucket::for_position(0), Bucket::MexicanA);
    /// assert_eq!(Bucket::for_position(1), Bucket::UnitedStatesA);
    /// assert_eq!(Bucket::for_position(4), Bucket::MexicanA);
    /// ```
    #[must_use]
    pub const fn for_position(index: usize) -> Self {
        match index.rem_euclid(4) {
            0 => Self::MexicanA,
            1 => Self::UnitedStatesA,
            2 => Self::MexicanB,
            _ => Self::UnitedStatesB,
        }
    }

    /// Nationality whose first names this bucket draws from.
    #[must_use]
    pub const fn nationality(self) -> Nationality {
        match self {
            Self::MexicanA | Self::MexicanB => Nationality::Mexican,
            Self::UnitedStatesA | Self::UnitedStatesB => Nationality::UnitedStates,
        }
    }

    /// Surname pool for this bucket.
    #[must_use]
    pub const fn surnames(self) -> &'static [&'static str] {
        match self {
            Self::MexicanA => &MEXICAN_SURNAMES_A,
            Self::UnitedStatesA => &US_SURNAMES_A,
            Self::MexicanB => &MEXICAN_SURNAMES_B,
            Self::UnitedStatesB => &US_SURNAMES_B,
        }
    }

    /// Name of the surname pool, used in diagnostics.
    #[must_use]
    pub(crate) const fn surname_pool_label(self) -> &'static str {
        match self {
            Self::MexicanA => "mexican-surnames-a",
            Self::UnitedStatesA => "united-states-surnames-a",
            Self::MexicanB => "mexican-surnames-b",
            Self::UnitedStatesB => "united-states-surnames-b",
        }
    }
}
