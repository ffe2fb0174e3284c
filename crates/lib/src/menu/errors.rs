//! Menu catalog error types.
//!
//! Unknown names only arise at string boundaries (CLI arguments, config);
//! the enum-typed lookups are total.

use thiserror::Error;

use super::{MealCategory, Weekday};

/// Errors raised while parsing meal/day names or building a catalog.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Name does not match any meal category.
    #[error("Unknown meal category: {name}")]
    UnknownCategory {
        /// The name that failed to parse
        name: String,
    },

    /// Name does not match any weekday.
    #[error("Unknown day: {name}")]
    UnknownDay {
        /// The name that failed to parse
        name: String,
    },

    /// A dish list must hold at least one item.
    #[error("Dish list must not be empty")]
    EmptyDishList,

    /// A dish name was empty or whitespace only.
    #[error("Dish at position {index} is blank")]
    EmptyDish {
        /// Position of the blank item in the list
        index: usize,
    },

    /// A catalog is missing one of the four meal categories.
    #[error("Catalog has no entry for {category}")]
    MissingCategory {
        /// The absent category
        category: MealCategory,
    },

    /// A weekly catalog is missing a day for a category.
    #[error("Weekly catalog has no {day} entry for {category}")]
    MissingDay {
        /// Category being checked
        category: MealCategory,
        /// The absent day
        day: Weekday,
    },
}

impl MenuError {
    /// Check if this error is an unknown category or day name.
    pub fn is_unknown_name(&self) -> bool {
        matches!(
            self,
            MenuError::UnknownCategory { .. } | MenuError::UnknownDay { .. }
        )
    }

    /// Check if this error reports a catalog that breaks its invariants.
    pub fn is_invalid_catalog(&self) -> bool {
        matches!(
            self,
            MenuError::EmptyDishList
                | MenuError::EmptyDish { .. }
                | MenuError::MissingCategory { .. }
                | MenuError::MissingDay { .. }
        )
    }
}

impl From<MenuError> for crate::Error {
    fn from(err: MenuError) -> Self {
        crate::Error::Menu(err)
    }
}
