//! Fixed catalogs the seeder always installs.

use crate::model::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Template for products generated under a featured brand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductLine {
    pub kind: &'static str,
    pub prefix: &'static str,
    pub category: &'static str,
    pub price_range: PriceRange,
}

const fn line(
    kind: &'static str,
    prefix: &'static str,
    category: &'static str,
    min: u32,
    max: u32,
) -> ProductLine {
    ProductLine {
        kind,
        prefix,
        category,
        price_range: PriceRange { min, max },
    }
}

pub fn seed_users() -> Vec<SeedUser> {
    [
        ("admin@example.com", "admin123", "Admin", Role::Admin),
        ("member@example.com", "member123", "Member", Role::Member),
        ("merchant@example.com", "merchant123", "Merchant", Role::Merchant),
    ]
    .into_iter()
    .map(|(email, password, first_name, role)| SeedUser {
        email: email.to_string(),
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: "User".to_string(),
        role,
    })
    .collect()
}

pub const BRAND_CATEGORIES: &[NamedEntry] = &[
    NamedEntry {
        name: "Televisions",
        description: "High-definition LED and OLED TVs.",
    },
    NamedEntry {
        name: "Cameras",
        description: "Mirrorless and DSLR cameras.",
    },
    NamedEntry {
        name: "Audio",
        description: "Headphones, speakers, and soundbars.",
    },
    NamedEntry {
        name: "Gaming",
        description: "Gaming consoles and accessories.",
    },
    NamedEntry {
        name: "Mobile Phones",
        description: "Smartphones and accessories.",
    },
    NamedEntry {
        name: "Home Appliances",
        description: "Refrigerators, microwaves, and washing machines.",
    },
    NamedEntry {
        name: "Furniture",
        description: "Home and office furniture.",
    },
];

pub const FEATURED_BRANDS: &[NamedEntry] = &[
    NamedEntry {
        name: "Sony Bangladesh",
        description: "Official Sony brand for Bangladesh, offering premium electronics and entertainment products.",
    },
    NamedEntry {
        name: "Walton",
        description: "Leading Bangladeshi electronics brand specializing in appliances and gadgets.",
    },
    NamedEntry {
        name: "RFL",
        description: "Renowned Bangladeshi brand for furniture, plastics, and household products.",
    },
    NamedEntry {
        name: "Vision",
        description: "Popular Bangladeshi electronics brand focusing on TVs and appliances.",
    },
    NamedEntry {
        name: "Singer Bangladesh",
        description: "Trusted brand in Bangladesh for home appliances and consumer electronics.",
    },
];

const SONY_LINES: &[ProductLine] = &[
    line("TV", "Bravia", "Televisions", 500, 2000),
    line("Camera", "Alpha", "Cameras", 300, 1500),
    line("Headphones", "WH-", "Audio", 50, 300),
    line("Console", "PlayStation", "Gaming", 400, 600),
    line("Smartphone", "Xperia", "Mobile Phones", 200, 1000),
];

const WALTON_LINES: &[ProductLine] = &[
    line("Refrigerator", "W", "Home Appliances", 200, 800),
    line("TV", "Smart LED", "Televisions", 150, 500),
    line("Air Conditioner", "AC", "Home Appliances", 300, 600),
];

const RFL_LINES: &[ProductLine] = &[
    line("Chair", "Comfort", "Furniture", 20, 100),
    line("Table", "Elite", "Furniture", 50, 200),
    line("Storage", "Durable", "Furniture", 30, 150),
];

const VISION_LINES: &[ProductLine] = &[
    line("TV", "LED", "Televisions", 100, 400),
    line("Refrigerator", "Cool", "Home Appliances", 150, 500),
];

const SINGER_LINES: &[ProductLine] = &[
    line("Washing Machine", "Auto", "Home Appliances", 200, 600),
    line("Microwave", "Solo", "Home Appliances", 80, 200),
    line("TV", "Smart", "Televisions", 150, 450),
];

/// Product lines for a featured brand, or an empty slice for any other brand
pub fn product_lines(brand_name: &str) -> &'static [ProductLine] {
    match brand_name {
        "Sony Bangladesh" => SONY_LINES,
        "Walton" => WALTON_LINES,
        "RFL" => RFL_LINES,
        "Vision" => VISION_LINES,
        "Singer Bangladesh" => SINGER_LINES,
        _ => &[],
    }
}
