use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::types::{Sex, Species, Vector2};

/// Per-species behaviour. Adding a species means adding one row to
/// [`SpeciesTraits::of`].
#[derive(Debug)]
pub struct SpeciesTraits {
    pub movement_order: &'static [Vector2],
    pub predator:       bool,
    pub edible:         bool,
}

static LION: SpeciesTraits = SpeciesTraits {
    movement_order: &[Vector2::RIGHT, Vector2::LEFT],
    predator:       true,
    edible:         false,
};

static CROCODILE: SpeciesTraits = SpeciesTraits {
    movement_order: &[Vector2::UP, Vector2::DOWN],
    predator:       true,
    edible:         false,
};

static ELEPHANT: SpeciesTraits = SpeciesTraits {
    movement_order: &[
        Vector2::UP,
        Vector2::RIGHT,
        Vector2::DOWN,
        Vector2::LEFT,
    ],
    predator:       false,
    edible:         false,
};

static ANTELOPE: SpeciesTraits = SpeciesTraits {
    movement_order: &[Vector2::RIGHT],
    predator:       false,
    edible:         true,
};

impl SpeciesTraits {
    #[must_use]
    pub fn of(species: Species) -> &'static Self {
        match species {
            Species::Lion => &LION,
            Species::Crocodile => &CROCODILE,
            Species::Elephant => &ELEPHANT,
            Species::Antelope => &ANTELOPE,
        }
    }
}

/// Decides the sex of each newborn.
pub trait SexSource {
    fn next_sex(&mut self) -> Sex;
}

/// Fair coin flip over any [`rand::Rng`].
pub struct RandomSex<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SexSource for RandomSex<R> {
    fn next_sex(&mut self) -> Sex {
        Sex::from_is_male(self.rng.gen_bool(0.5))
    }
}

/// Always yields the same sex.
#[derive(Debug, Clone, Copy)]
pub struct FixedSex(pub Sex);

impl SexSource for FixedSex {
    fn next_sex(&mut self) -> Sex {
        self.0
    }
}

/// Male, female, male, ...
#[derive(Debug, Clone, Copy)]
pub struct AlternatingSex {
    next: Sex,
}

impl AlternatingSex {
    #[must_use]
    pub const fn starting_with(sex: Sex) -> Self {
        Self { next: sex }
    }
}

impl SexSource for AlternatingSex {
    fn next_sex(&mut self) -> Sex {
        let sex = self.next;
        self.next = match sex {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        };
        sex
    }
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Animal {
    species: Species,
    sex:     Sex,
}

impl Animal {
    #[must_use]
    pub const fn new(species: Species, sex: Sex) -> Self {
        Self { species, sex }
    }

    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub fn traits(&self) -> &'static SpeciesTraits {
        SpeciesTraits::of(self.species)
    }

    #[must_use]
    pub fn movement_order(&self) -> &'static [Vector2] {
        self.traits().movement_order
    }

    #[must_use]
    pub const fn is_male(&self) -> bool {
        matches!(self.sex, Sex::Male)
    }

    #[must_use]
    pub const fn is_female(&self) -> bool {
        matches!(self.sex, Sex::Female)
    }

    #[must_use]
    pub fn is_predator(&self) -> bool {
        self.traits().predator
    }

    #[must_use]
    pub fn is_edible(&self) -> bool {
        self.traits().edible
    }

    /// Only edible animals can be eaten, and only by predators.
    #[must_use]
    pub fn can_be_eaten_by(&self, other: &Self) -> bool {
        self.is_edible() && other.is_predator()
    }

    /// Offspring of this female with `male`, or `None` when either parent
    /// has the wrong sex or the species differ. The parents are untouched;
    /// the sex source is only consulted when there is an offspring.
    pub fn breed_with(
        &self,
        male: &Self,
        sex_source: &mut dyn SexSource,
    ) -> Option<Self> {
        if !self.is_female() || !male.is_male() || self.species != male.species
        {
            return None;
        }

        Some(Self::new(self.species, sex_source.next_sex()))
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.sex, self.species)
    }
}
