//! Static meal catalogs.
//!
//! Two independent read-only tables describe what the mess serves:
//!
//! * [`MenuCatalog`]: the pool of dishes Chef Bot draws suggestions from,
//!   one [`DishList`] per [`MealCategory`].
//! * [`WeeklyMenuCatalog`]: the weekly schedule shown in the menu modal, one
//!   [`DishList`] per category and [`Weekday`].
//!
//! Both are built once from compiled-in data and never mutated. Their content
//! overlaps but neither is derived from the other.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};

mod data;
pub mod errors;
pub mod weekly;

pub use errors::MenuError;
pub use weekly::WeeklyMenuCatalog;

/// One of the four meal times of the mess.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealCategory {
    /// All categories in display order.
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Snacks,
        MealCategory::Dinner,
    ];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Snacks => "snacks",
            MealCategory::Dinner => "dinner",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Snacks => "Snacks",
            MealCategory::Dinner => "Dinner",
        }
    }

    /// Decorative marker used in replies and menu headers.
    pub fn icon(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "🌅",
            MealCategory::Lunch => "🍛",
            MealCategory::Snacks => "☕",
            MealCategory::Dinner => "🌙",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MealCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MenuError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Day of the week, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MenuError::UnknownDay {
                name: s.to_string(),
            })
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

/// Ordered, non-empty list of dish names.
///
/// Order is display and selection order only. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DishList(Vec<String>);

impl DishList {
    /// Build a list, rejecting empty lists and blank items.
    pub fn new<I, S>(items: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(MenuError::EmptyDishList);
        }
        if let Some(index) = items.iter().position(|item| item.trim().is_empty()) {
            return Err(MenuError::EmptyDish { index });
        }
        Ok(Self(items))
    }

    /// Build from compiled-in data, which the catalog tests keep valid.
    pub(crate) fn from_static(items: &[&str]) -> Self {
        debug_assert!(!items.is_empty());
        Self(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, dish: &str) -> bool {
        self.0.iter().any(|d| d == dish)
    }

    /// Draw one item uniformly at random.
    ///
    /// Draws are independent: consecutive calls may return the same item.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}

impl<'a> IntoIterator for &'a DishList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Mapping from every [`MealCategory`] to the dishes Chef Bot may suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    /// Indexed by [`MealCategory::index`]; always one list per category.
    dishes: Vec<DishList>,
}

impl MenuCatalog {
    /// Build a catalog, requiring all four categories.
    pub fn new(mut dishes: HashMap<MealCategory, DishList>) -> Result<Self, MenuError> {
        let dishes = MealCategory::ALL
            .into_iter()
            .map(|category| {
                dishes
                    .remove(&category)
                    .ok_or(MenuError::MissingCategory { category })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dishes })
    }

    /// The compiled-in suggestion pool of the Tirupati Mess.
    pub fn builtin() -> Self {
        Self {
            dishes: data::MENU
                .iter()
                .map(|(_, items)| DishList::from_static(items))
                .collect(),
        }
    }

    /// Dishes for a category. Total over the enum.
    pub fn dishes_for(&self, category: MealCategory) -> &DishList {
        &self.dishes[category.index()]
    }

    /// Dishes for a category given by name.
    pub fn dishes_for_name(&self, name: &str) -> Result<&DishList, MenuError> {
        Ok(self.dishes_for(name.parse()?))
    }

    /// Iterate categories with their dishes in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MealCategory, &DishList)> {
        MealCategory::ALL.into_iter().zip(self.dishes.iter())
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Serialize for MenuCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dishes.len()))?;
        for (category, dishes) in self.iter() {
            map.serialize_entry(category.as_str(), dishes)?;
        }
        map.end()
    }
}
