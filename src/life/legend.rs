use super::{
    animal::Animal,
    types::{Sex, Species},
};

const EMPTY_FIELD_SYMBOL: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendKey {
    pub species: Species,
    pub sex:     Sex,
    pub symbol:  char,
}

impl LegendKey {
    #[must_use]
    pub const fn new(species: Species, sex: Sex, symbol: char) -> Self {
        Self {
            species,
            sex,
            symbol,
        }
    }
}

const DEFAULT_KEYS: [LegendKey; 8] = [
    LegendKey::new(Species::Lion, Sex::Male, 'L'),
    LegendKey::new(Species::Lion, Sex::Female, 'l'),
    LegendKey::new(Species::Crocodile, Sex::Male, 'K'),
    LegendKey::new(Species::Crocodile, Sex::Female, 'k'),
    LegendKey::new(Species::Elephant, Sex::Male, 'S'),
    LegendKey::new(Species::Elephant, Sex::Female, 's'),
    LegendKey::new(Species::Antelope, Sex::Male, 'A'),
    LegendKey::new(Species::Antelope, Sex::Female, 'a'),
];

/// Two-way mapping between board symbols and animals, shared by the parser
/// and the display.
#[derive(Clone, Debug)]
pub struct Legend {
    keys:         Vec<LegendKey>,
    empty_symbol: char,
}

impl Legend {
    #[must_use]
    pub fn new(keys: Vec<LegendKey>, empty_symbol: char) -> Self {
        Self { keys, empty_symbol }
    }

    #[must_use]
    pub const fn empty_field_symbol(&self) -> char {
        self.empty_symbol
    }

    #[must_use]
    pub fn key_from_symbol(&self, symbol: char) -> Option<&LegendKey> {
        self.keys.iter().find(|key| key.symbol == symbol)
    }

    #[must_use]
    pub fn key_for(&self, animal: &Animal) -> Option<&LegendKey> {
        self.keys.iter().find(|key| {
            key.species == animal.species() && key.sex == animal.sex()
        })
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(DEFAULT_KEYS.to_vec(), EMPTY_FIELD_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use itertools::{iproduct, Itertools};

    use super::*;

    #[test]
    fn default_legend_covers_every_animal_with_distinct_symbols() {
        let legend = Legend::default();

        let symbols: Vec<char> = iproduct!(Species::iter(), Sex::iter())
            .map(|(&species, &sex)| {
                legend
                    .key_for(&Animal::new(species, sex))
                    .map(|key| key.symbol)
                    .unwrap_or_default()
            })
            .collect();

        assert_eq!(symbols.len(), 8);
        assert!(symbols.iter().all_unique());
        assert!(!symbols.contains(&legend.empty_field_symbol()));
        assert!(!symbols.contains(&'\0'));
    }

    #[test]
    fn symbols_round_trip_to_keys() {
        let legend = Legend::default();

        let key = legend.key_from_symbol('k');
        assert_eq!(
            key.map(|key| (key.species, key.sex)),
            Some((Species::Crocodile, Sex::Female))
        );
        assert!(legend.key_from_symbol('x').is_none());
        assert!(legend.key_from_symbol('.').is_none());
    }
}
