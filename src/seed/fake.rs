//! Random demo data for the seeder.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::seed::data::PriceRange;

const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden", "Tools",
    "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes", "Jewelry",
    "Sports", "Outdoors", "Automotive", "Industrial",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bauer", "Carter", "Dawson", "Ellis", "Fischer", "Grant", "Hayes", "Ingram",
    "Jensen", "Keller", "Lambert", "Morrison", "Nolan", "Ortega", "Parker", "Quinn", "Reyes",
    "Schmidt", "Turner", "Underwood", "Vance", "Walsh", "Young", "Zimmerman",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd"];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed", "Refined",
    "Unbranded", "Tasty", "Modern", "Elegant", "Luxurious",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Silk", "Marble",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat",
];

/// Seedable generator for demo records
#[derive(Debug)]
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Uniform index below `len`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    pub fn department(&mut self) -> String {
        self.pick(DEPARTMENTS).to_string()
    }

    pub fn company_name(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(COMPANY_SUFFIXES)),
            1 => format!("{} - {}", self.pick(LAST_NAMES), self.pick(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES)
            ),
        }
    }

    pub fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NOUNS)
        )
    }

    /// A capitalized lorem ipsum sentence of 3 to 10 words
    pub fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(3..=10);
        let words: Vec<&str> = (0..count).map(|_| self.pick(LOREM_WORDS)).collect();
        let sentence = words.join(" ");

        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    /// Mixed-case alphanumeric string, used for SKUs
    pub fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// Price within the range, rounded to cents
    pub fn price(&mut self, range: PriceRange) -> f64 {
        let (min, max) = (f64::from(range.min), f64::from(range.max));
        let raw = if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        };
        (raw * 100.0).round() / 100.0
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `base`, or `base` with the lowest numeric suffix not yet in `taken`
pub fn unique_name(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{} {}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_values() {
        let mut a = Faker::from_seed(7);
        let mut b = Faker::from_seed(7);

        assert_eq!(a.product_name(), b.product_name());
        assert_eq!(a.alphanumeric(10), b.alphanumeric(10));
        assert_eq!(a.company_name(), b.company_name());
    }

    #[test]
    fn test_sku_shape() {
        let mut faker = Faker::from_seed(1);
        let sku = faker.alphanumeric(10);

        assert_eq!(sku.len(), 10);
        assert!(sku.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_price_stays_in_range_with_cents() {
        let mut faker = Faker::from_seed(3);
        let range = PriceRange { min: 50, max: 300 };

        for _ in 0..200 {
            let price = faker.price(range);
            assert!((50.0..=300.0).contains(&price), "{}", price);
            assert!(((price * 100.0).round() - price * 100.0).abs() < 1e-6);
        }
        assert_eq!(faker.price(PriceRange { min: 9, max: 9 }), 9.0);
    }

    #[test]
    fn test_sentence_is_capitalized_and_terminated() {
        let mut faker = Faker::from_seed(11);
        let sentence = faker.sentence();

        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_unique_name_appends_suffix() {
        let mut taken = HashSet::new();
        assert_eq!(unique_name("Books", &taken), "Books");

        taken.insert("Books".to_string());
        taken.insert("Books 2".to_string());
        assert_eq!(unique_name("Books", &taken), "Books 3");
    }
}
