//! Compiled-in menu content of the Tirupati Mess.
//!
//! Rows are listed in [`MealCategory::ALL`] / [`Weekday::ALL`] order.

use super::{MealCategory, Weekday};

pub(crate) static MENU: [(MealCategory, &[&str]); 4] = [
    (
        MealCategory::Breakfast,
        &[
            "Masala Dosa with Coconut Chutney",
            "Poha with Green Chutney",
            "Upma with Sambar",
            "Idli Vada with Tomato Chutney",
            "Paratha with Curd and Pickle",
            "Bread Omelette with Tea",
            "Rava Upma with Pickle",
            "Aloo Paratha with Butter",
        ],
    ),
    (
        MealCategory::Lunch,
        &[
            "Rice with Dal Tadka and Mixed Vegetables",
            "Chapati with Paneer Butter Masala",
            "Biryani with Raita and Pickle",
            "Rice with Sambar and Rasam",
            "Rajma Rice with Papad",
            "Chole Bhature with Onion Salad",
            "Pulao with Chicken Curry",
            "Dal Rice with Aloo Gobi",
        ],
    ),
    (
        MealCategory::Snacks,
        &[
            "Samosa with Green Chutney",
            "Pav Bhaji with Butter",
            "Masala Chai with Biscuits",
            "Corn Chaat with Lemon",
            "Vada Pav with Fried Green Chillies",
            "Bhel Puri with Sev",
            "Cutlet with Ketchup",
            "Pakora with Mint Chutney",
        ],
    ),
    (
        MealCategory::Dinner,
        &[
            "Rice with Dal and Vegetable Curry",
            "Chapati with Paneer Masala",
            "Fried Rice with Manchurian",
            "Rice with Curd and Pickle",
            "Pasta with Garlic Bread",
            "Khichdi with Papad",
            "Noodles with Chilli Chicken",
            "Rice with Fish Curry",
        ],
    ),
];

type Week = [(Weekday, &'static [&'static str]); 7];

pub(crate) static WEEKLY: [(MealCategory, Week); 4] = [
    (
        MealCategory::Breakfast,
        [
            (
                Weekday::Monday,
                &[
                    "Masala Dosa with Coconut Chutney",
                    "Poha with Green Chutney",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Tuesday,
                &[
                    "Idli Vada with Tomato Chutney",
                    "Upma with Sambar",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Wednesday,
                &[
                    "Paratha with Curd and Pickle",
                    "Rava Upma with Pickle",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Thursday,
                &[
                    "Bread Omelette with Tea",
                    "Aloo Paratha with Butter",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Friday,
                &[
                    "Masala Dosa with Coconut Chutney",
                    "Poha with Green Chutney",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Saturday,
                &[
                    "Idli Vada with Tomato Chutney",
                    "Upma with Sambar",
                    "Tea/Coffee",
                ],
            ),
            (
                Weekday::Sunday,
                &[
                    "Paratha with Curd and Pickle",
                    "Bread Omelette",
                    "Tea/Coffee",
                ],
            ),
        ],
    ),
    (
        MealCategory::Lunch,
        [
            (
                Weekday::Monday,
                &["Rice with Dal Tadka", "Mixed Vegetables", "Chapati", "Pickle"],
            ),
            (
                Weekday::Tuesday,
                &["Biryani with Raita", "Pickle", "Papad", "Curd"],
            ),
            (
                Weekday::Wednesday,
                &["Rice with Sambar", "Rasam", "Chapati", "Vegetable Curry"],
            ),
            (
                Weekday::Thursday,
                &["Rajma Rice", "Papad", "Aloo Gobi", "Curd"],
            ),
            (
                Weekday::Friday,
                &["Chole Bhature", "Onion Salad", "Pickle", "Lassi"],
            ),
            (
                Weekday::Saturday,
                &["Pulao with Chicken Curry", "Raita", "Papad", "Pickle"],
            ),
            (
                Weekday::Sunday,
                &["Dal Rice", "Aloo Gobi", "Chapati", "Pickle"],
            ),
        ],
    ),
    (
        MealCategory::Snacks,
        [
            (
                Weekday::Monday,
                &["Samosa with Green Chutney", "Masala Chai", "Biscuits"],
            ),
            (
                Weekday::Tuesday,
                &["Pav Bhaji with Butter", "Masala Chai", "Cookies"],
            ),
            (
                Weekday::Wednesday,
                &["Corn Chaat with Lemon", "Coffee", "Namkeen"],
            ),
            (
                Weekday::Thursday,
                &["Vada Pav with Fried Green Chillies", "Chai", "Biscuits"],
            ),
            (
                Weekday::Friday,
                &["Bhel Puri with Sev", "Fresh Lime Water", "Chips"],
            ),
            (
                Weekday::Saturday,
                &["Cutlet with Ketchup", "Masala Chai", "Cookies"],
            ),
            (
                Weekday::Sunday,
                &["Pakora with Mint Chutney", "Chai", "Namkeen"],
            ),
        ],
    ),
    (
        MealCategory::Dinner,
        [
            (
                Weekday::Monday,
                &["Rice with Dal", "Vegetable Curry", "Chapati", "Pickle"],
            ),
            (
                Weekday::Tuesday,
                &["Fried Rice with Manchurian", "Soup", "Papad", "Curd"],
            ),
            (
                Weekday::Wednesday,
                &["Rice with Curd", "Pickle", "Chapati", "Sabzi"],
            ),
            (
                Weekday::Thursday,
                &["Pasta with Garlic Bread", "Salad", "Soup", "Dessert"],
            ),
            (
                Weekday::Friday,
                &["Khichdi with Papad", "Curd", "Pickle", "Ghee"],
            ),
            (
                Weekday::Saturday,
                &["Noodles with Chilli Chicken", "Soup", "Fried Rice", "Pickle"],
            ),
            (
                Weekday::Sunday,
                &["Rice with Fish Curry", "Chapati", "Dal", "Pickle"],
            ),
        ],
    ),
];
