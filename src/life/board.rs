use std::collections::HashMap;

use super::{
    animal::Animal,
    types::{Sex, Species, Vector2},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    position:         Vector2,
    occupying_animal: Option<Animal>,
}

impl Field {
    const fn new(position: Vector2) -> Self {
        Self {
            position,
            occupying_animal: None,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vector2 {
        self.position
    }

    #[must_use]
    pub const fn occupying_animal(&self) -> Option<Animal> {
        self.occupying_animal
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupying_animal.is_none()
    }

    fn occupant_matches(&self, predicate: impl Fn(&Animal) -> bool) -> bool {
        self.occupying_animal.as_ref().is_some_and(predicate)
    }
}

/// Fixed-size grid of fields, stored row by row.
///
/// The `*_fields` queries return owned copies of the matching fields, so a
/// caller can keep iterating them while it mutates the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width:  i64,
    height: i64,
    fields: Vec<Field>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let width = i64::try_from(width).unwrap_or(i64::MAX);
        let height = i64::try_from(height).unwrap_or(i64::MAX);

        let fields = (0..height)
            .flat_map(|y| (0..width).map(move |x| Field::new(Vector2::new(x, y))))
            .collect();

        Self {
            width,
            height,
            fields,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub const fn contains(&self, position: Vector2) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width
            && position.y < self.height
    }

    fn field_index(&self, position: Vector2) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        usize::try_from(position.y * self.width + position.x).ok()
    }

    #[must_use]
    pub fn all_fields(&self) -> &[Field] {
        &self.fields
    }

    fn fields_where(&self, predicate: impl Fn(&Animal) -> bool) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|field| field.occupant_matches(&predicate))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn animal_fields(&self) -> Vec<Field> {
        self.fields_where(|_| true)
    }

    #[must_use]
    pub fn female_animal_fields(&self) -> Vec<Field> {
        self.fields_where(Animal::is_female)
    }

    #[must_use]
    pub fn male_animal_fields(&self) -> Vec<Field> {
        self.fields_where(Animal::is_male)
    }

    #[must_use]
    pub fn edible_animal_fields(&self) -> Vec<Field> {
        self.fields_where(Animal::is_edible)
    }

    #[must_use]
    pub fn field_at(&self, position: Vector2) -> Option<&Field> {
        self.field_index(position).map(|index| &self.fields[index])
    }

    fn field_at_mut(&mut self, position: Vector2) -> Option<&mut Field> {
        self.field_index(position)
            .map(move |index| &mut self.fields[index])
    }

    #[must_use]
    pub fn animal_at(&self, position: Vector2) -> Option<Animal> {
        self.field_at(position).and_then(Field::occupying_animal)
    }

    /// Walks `search_order` from `reference` and returns the first on-board
    /// field satisfying `predicate`.
    pub fn first_relative_field_where(
        &self,
        reference: Vector2,
        search_order: &[Vector2],
        predicate: impl Fn(&Field) -> bool,
    ) -> Option<&Field> {
        search_order
            .iter()
            .filter_map(|&direction| self.field_at(reference + direction))
            .find(|field| predicate(field))
    }

    /// Puts `animal` on an empty field. Returns `false` (and changes
    /// nothing) if the field is occupied or off the board.
    pub fn place(&mut self, position: Vector2, animal: Animal) -> bool {
        match self.field_at_mut(position) {
            Some(field) if field.is_empty() => {
                field.occupying_animal = Some(animal);
                true
            }
            _ => false,
        }
    }

    /// Clears a field, handing back whatever stood there.
    pub fn vacate(&mut self, position: Vector2) -> Option<Animal> {
        self.field_at_mut(position)
            .and_then(|field| field.occupying_animal.take())
    }

    /// Moves the occupant of `from` onto an empty `to`. Returns `false` and
    /// leaves the board untouched if either side makes that impossible.
    pub fn relocate(&mut self, from: Vector2, to: Vector2) -> bool {
        let destination_free =
            self.field_at(to).is_some_and(Field::is_empty);
        if !destination_free {
            return false;
        }

        match self.vacate(from) {
            Some(animal) => self.place(to, animal),
            None => false,
        }
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_empty()).count()
    }

    #[must_use]
    pub fn census(&self) -> HashMap<(Species, Sex), usize> {
        let mut census = HashMap::new();
        for animal in self.fields.iter().filter_map(Field::occupying_animal) {
            *census.entry((animal.species(), animal.sex())).or_insert(0) += 1;
        }
        census
    }
}
