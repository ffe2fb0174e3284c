//! Weekly menu schedule shown by the menu modal.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{DishList, MealCategory, MenuCatalog, MenuError, Weekday, data};

/// Mapping from every [`MealCategory`] and [`Weekday`] to the items served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyMenuCatalog {
    /// `days[category][weekday]`, both by enum index.
    days: Vec<Vec<DishList>>,
}

impl WeeklyMenuCatalog {
    /// Build a weekly catalog, requiring all categories and all seven days.
    pub fn new(
        mut schedule: HashMap<MealCategory, HashMap<Weekday, DishList>>,
    ) -> Result<Self, MenuError> {
        let mut days = Vec::with_capacity(MealCategory::ALL.len());
        for category in MealCategory::ALL {
            let mut week = schedule
                .remove(&category)
                .ok_or(MenuError::MissingCategory { category })?;
            let row = Weekday::ALL
                .into_iter()
                .map(|day| {
                    week.remove(&day)
                        .ok_or(MenuError::MissingDay { category, day })
                })
                .collect::<Result<Vec<_>, _>>()?;
            days.push(row);
        }
        Ok(Self { days })
    }

    /// The compiled-in weekly schedule of the Tirupati Mess.
    pub fn builtin() -> Self {
        Self {
            days: data::WEEKLY
                .iter()
                .map(|(_, week)| {
                    week.iter()
                        .map(|(_, items)| DishList::from_static(items))
                        .collect()
                })
                .collect(),
        }
    }

    /// Items served for a category on a day. Total over the enums.
    pub fn items_for(&self, category: MealCategory, day: Weekday) -> &DishList {
        &self.days[category.index()][day.index()]
    }

    /// Items for a category and day given by name.
    pub fn items_for_names(&self, category: &str, day: &str) -> Result<&DishList, MenuError> {
        Ok(self.items_for(category.parse()?, day.parse()?))
    }

    /// Days in display order for a category (Monday through Sunday).
    pub fn days_for(&self, _category: MealCategory) -> std::array::IntoIter<Weekday, 7> {
        Weekday::ALL.into_iter()
    }

    /// Whole week for a category, in display order.
    pub fn week(&self, category: MealCategory) -> impl Iterator<Item = (Weekday, &DishList)> {
        Weekday::ALL
            .into_iter()
            .zip(self.days[category.index()].iter())
    }

    /// Verify every category of `menu` has a full week here.
    ///
    /// Construction already guarantees full coverage; this is the cross-catalog
    /// check callers run when both catalogs come from outside.
    pub fn check_covers(&self, menu: &MenuCatalog) -> Result<(), MenuError> {
        for (category, _) in menu.iter() {
            let week = self
                .days
                .get(category.index())
                .ok_or(MenuError::MissingCategory { category })?;
            for day in Weekday::ALL {
                match week.get(day.index()) {
                    Some(items) if !items.is_empty() => {}
                    _ => return Err(MenuError::MissingDay { category, day }),
                }
            }
        }
        Ok(())
    }
}

impl Default for WeeklyMenuCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Serialize for WeeklyMenuCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for category in MealCategory::ALL {
            map.serialize_entry(category.as_str(), &WeekView(self, category))?;
        }
        map.end()
    }
}

/// Serializes one category's week as a day-name keyed map.
pub struct WeekView<'a>(pub &'a WeeklyMenuCatalog, pub MealCategory);

impl Serialize for WeekView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for (day, items) in self.0.week(self.1) {
            map.serialize_entry(day.name(), items)?;
        }
        map.end()
    }
}
