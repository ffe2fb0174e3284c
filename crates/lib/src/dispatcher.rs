//! Keyword-driven suggestion dispatcher.
//!
//! Chef Bot does not understand language. A reply is chosen in two steps:
//!
//! 1. [`classify`] lowercases the text and walks [`KEYWORD_TABLE`] in order;
//!    the first row with a keyword contained in the text decides the
//!    [`Intent`]. Matching is plain substring containment, so `"hi"` also
//!    matches inside `"chips"`.
//! 2. [`Dispatcher`] renders the intent, drawing dishes uniformly at random
//!    from the [`MenuCatalog`] where the intent calls for a suggestion.
//!
//! Every string, including the empty string, yields a non-empty reply.

use rand::Rng;
use tracing::debug;

use crate::constants::{FALLBACK_REPLY, GREETING_REPLY, THANKS_REPLY};
use crate::menu::{MealCategory, MenuCatalog};

/// What a piece of user text asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A suggestion for one meal time.
    Meal(MealCategory),
    /// One suggestion for every meal time.
    AllMeals,
    Greeting,
    Thanks,
    /// Nothing matched.
    Fallback,
}

/// One row of the keyword table: any keyword contained in the text selects the intent.
#[derive(Debug)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

/// Keyword groups in priority order. First match wins.
pub static KEYWORD_TABLE: [KeywordRule; 7] = [
    KeywordRule {
        keywords: &["breakfast"],
        intent: Intent::Meal(MealCategory::Breakfast),
    },
    KeywordRule {
        keywords: &["lunch"],
        intent: Intent::Meal(MealCategory::Lunch),
    },
    KeywordRule {
        keywords: &["snacks", "evening"],
        intent: Intent::Meal(MealCategory::Snacks),
    },
    KeywordRule {
        keywords: &["dinner"],
        intent: Intent::Meal(MealCategory::Dinner),
    },
    KeywordRule {
        keywords: &["menu", "all"],
        intent: Intent::AllMeals,
    },
    KeywordRule {
        keywords: &["hello", "hi"],
        intent: Intent::Greeting,
    },
    KeywordRule {
        keywords: &["thanks", "thank"],
        intent: Intent::Thanks,
    },
];

/// Classify user text against [`KEYWORD_TABLE`].
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

/// Sentence wrapping a single-meal suggestion.
pub fn meal_reply(category: MealCategory, dish: &str) -> String {
    match category {
        MealCategory::Breakfast => format!(
            "Your breakfast recommendation: {dish}! Perfect way to start your day at SRM! {}",
            category.icon()
        ),
        MealCategory::Lunch => format!(
            "Your lunch recommendation: {dish}! A hearty meal to fuel your afternoon studies! {}",
            category.icon()
        ),
        MealCategory::Snacks => format!(
            "Your snack recommendation: {dish}! Perfect for your study break! {}",
            category.icon()
        ),
        MealCategory::Dinner => format!(
            "Your dinner recommendation: {dish}! A delicious way to end your day! {}",
            category.icon()
        ),
    }
}

/// Maps user text to Chef Bot replies.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    menu: MenuCatalog,
}

impl Dispatcher {
    pub fn new(menu: MenuCatalog) -> Self {
        Self { menu }
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    /// Reply to `text` using the thread-local RNG.
    pub fn respond(&self, text: &str) -> String {
        self.respond_with(text, &mut rand::thread_rng())
    }

    /// Reply to `text`, drawing dishes from `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let intent = classify(text);
        debug!(?intent, "Classified chat input");
        self.render(intent, rng)
    }

    /// Render the reply for an already classified intent.
    pub fn render<R: Rng + ?Sized>(&self, intent: Intent, rng: &mut R) -> String {
        match intent {
            Intent::Meal(category) => {
                meal_reply(category, self.menu.dishes_for(category).choose(rng))
            }
            Intent::AllMeals => self
                .menu
                .iter()
                .map(|(category, dishes)| {
                    format!(
                        "{} {}: {}",
                        category.icon(),
                        category.label(),
                        dishes.choose(rng)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Thanks => THANKS_REPLY.to_string(),
            Intent::Fallback => FALLBACK_REPLY.to_string(),
        }
    }
}
