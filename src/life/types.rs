use std::{fmt, ops::Add, slice::Iter};

use serde::Serialize;

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector2 {
    pub x: i64,
    pub y: i64,
}

impl Vector2 {
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(0, -1);

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.offset(other.x, other.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Lion,
    Crocodile,
    Elephant,
    Antelope,
}

impl Species {
    pub fn iter() -> Iter<'static, Self> {
        static SPECIES: [Species; 4] = [
            Species::Lion,
            Species::Crocodile,
            Species::Elephant,
            Species::Antelope,
        ];
        SPECIES.iter()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Lion => "Lion",
                Self::Crocodile => "Crocodile",
                Self::Elephant => "Elephant",
                Self::Antelope => "Antelope",
            }
        )
    }
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn iter() -> Iter<'static, Self> {
        static SEXES: [Sex; 2] = [Sex::Male, Sex::Female];
        SEXES.iter()
    }

    #[must_use]
    pub const fn from_is_male(is_male: bool) -> Self {
        if is_male {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Male => "male",
                Self::Female => "female",
            }
        )
    }
}
