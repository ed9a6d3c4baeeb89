//! Server-side rendering of the storefront homepage.
//!
//! Rendering is a pure function of [`Homepage`]: a carousel with one slide
//! per banner, a "Top Brands" grid and a "Top Sales" grid.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BANNERS_JSON: &str = include_str!("../../assets/banners.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Parse the banners bundled with the binary
pub fn bundled_banners() -> anyhow::Result<Vec<Banner>> {
    Ok(serde_json::from_str(BANNERS_JSON)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max: u32,
    pub min: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveSetting {
    pub breakpoint: Breakpoint,
    pub items: u32,
    pub slides_to_slide: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselOptions {
    pub swipeable: bool,
    pub show_dots: bool,
    pub infinite: bool,
    pub auto_play: bool,
    pub responsive: BTreeMap<String, ResponsiveSetting>,
}

/// One item per view at every screen size
pub fn one_item_responsive() -> BTreeMap<String, ResponsiveSetting> {
    [
        ("desktop", 3000, 1024),
        ("tablet", 1024, 464),
        ("mobile", 464, 0),
    ]
    .into_iter()
    .map(|(name, max, min)| {
        (
            name.to_string(),
            ResponsiveSetting {
                breakpoint: Breakpoint { max, min },
                items: 1,
                slides_to_slide: 1,
            },
        )
    })
    .collect()
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            swipeable: true,
            show_dots: true,
            infinite: true,
            auto_play: false,
            responsive: one_item_responsive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Homepage {
    pub banners: Vec<Banner>,
    pub brand_ids: Vec<u32>,
    pub top_sale_ids: Vec<u32>,
    pub carousel: CarouselOptions,
}

impl Homepage {
    pub fn new(banners: Vec<Banner>) -> Self {
        Self {
            banners,
            brand_ids: (1..=5).collect(),
            top_sale_ids: (1..=10).collect(),
            carousel: CarouselOptions::default(),
        }
    }

    /// Homepage built from the bundled banners
    pub fn bundled() -> anyhow::Result<Self> {
        Ok(Self::new(bundled_banners()?))
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn render_carousel(banners: &[Banner], options: &CarouselOptions) -> serde_json::Result<String> {
    let responsive = serde_json::to_string(&options.responsive)?;
    let slides = banners
        .iter()
        .map(|banner| {
            format!(
                r#"<div class="carousel-slide"><img src="{}" class="w-100"></div>"#,
                escape_html(&banner.image_url)
            )
        })
        .join("\n");

    Ok(format!(
        r#"<div class="home-carousel mb-4">
<div class="carousel-slider" data-swipeable="{}" data-show-dots="{}" data-infinite="{}" data-auto-play="{}" data-responsive="{}">
{}
</div>
</div>"#,
        options.swipeable,
        options.show_dots,
        options.infinite,
        options.auto_play,
        escape_html(&responsive),
        slides
    ))
}

fn render_section(class: &str, title: &str, view_all: &str, cells: String) -> String {
    format!(
        r#"<div class="{} px-3 mb-5">
<div class="d-flex justify-content-between align-items-center mb-3">
<h5 class="mb-0">{}</h5>
<a href="{}" class="text-primary">View All</a>
</div>
<div class="row gx-3">
{}
</div>
</div>"#,
        class,
        escape_html(title),
        escape_html(view_all),
        cells
    )
}

fn render_brand_cell(id: u32) -> String {
    format!(
        r#"<div class="col-6 col-md-2 mb-3 brand-cell"><div class="text-center border rounded p-2 h-100"><img src="/images/brands/brand-{id}.png" class="img-fluid" alt="brand-{id}"></div></div>"#
    )
}

fn render_product_cell(id: u32) -> String {
    format!(
        r#"<div class="col-6 col-md-2 mb-4 product-cell"><div class="border p-3 text-center h-100"><img src="/images/products/top-sale-{id}.jpg" class="img-fluid mb-2" alt="top-sale-{id}"><h6 class="mb-1">Product {id}</h6><p class="text-muted small mb-0">$99.99</p></div></div>"#
    )
}

/// Render the homepage body markup
pub fn render_homepage(page: &Homepage) -> serde_json::Result<String> {
    let brands = page.brand_ids.iter().map(|&id| render_brand_cell(id)).join("\n");
    let products = page
        .top_sale_ids
        .iter()
        .map(|&id| render_product_cell(id))
        .join("\n");

    Ok(format!(
        "<div class=\"homepage\">\n{}\n{}\n{}\n</div>",
        render_carousel(&page.banners, &page.carousel)?,
        render_section("top-brands-section", "Top Brands", "/brands", brands),
        render_section("top-sales-section", "Top Sales", "/sales", products),
    ))
}

/// Render a complete HTML document around the homepage
pub fn render_document(page: &Homepage) -> serde_json::Result<String> {
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Storefront</title>
</head>
<body>
{}
</body>
</html>"#,
        render_homepage(page)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banners(n: usize) -> Vec<Banner> {
        (1..=n)
            .map(|i| Banner {
                image_url: format!("/images/banners/banner-{}.jpg", i),
            })
            .collect()
    }

    #[test]
    fn test_one_slide_per_banner() {
        for n in [0, 1, 3, 7] {
            let html = render_homepage(&Homepage::new(banners(n))).unwrap();
            assert_eq!(html.matches(r#"class="carousel-slide""#).count(), n);
        }
    }

    #[test]
    fn test_default_grids_have_five_brands_and_ten_products() {
        let html = render_homepage(&Homepage::new(banners(2))).unwrap();

        assert_eq!(html.matches("brand-cell").count(), 5);
        assert_eq!(html.matches("product-cell").count(), 10);
        assert!(html.contains(r#"src="/images/brands/brand-5.png""#));
        assert!(html.contains(r#"alt="top-sale-10""#));
        assert!(html.contains("<h6 class=\"mb-1\">Product 10</h6>"));
        assert_eq!(html.matches("$99.99").count(), 10);
    }

    #[test]
    fn test_sections_link_to_listings() {
        let html = render_homepage(&Homepage::new(Vec::new())).unwrap();

        assert!(html.contains(r#"<h5 class="mb-0">Top Brands</h5>"#));
        assert!(html.contains(r#"<a href="/brands" class="text-primary">View All</a>"#));
        assert!(html.contains(r#"<h5 class="mb-0">Top Sales</h5>"#));
        assert!(html.contains(r#"<a href="/sales" class="text-primary">View All</a>"#));
    }

    #[test]
    fn test_carousel_options_rendered_as_data_attributes() {
        let html = render_homepage(&Homepage::new(banners(1))).unwrap();

        assert!(html.contains(r#"data-swipeable="true""#));
        assert!(html.contains(r#"data-auto-play="false""#));
        assert!(html.contains("&quot;slidesToSlide&quot;:1"));
    }

    #[test]
    fn test_responsive_attribute_holds_the_breakpoint_table() {
        let html = render_homepage(&Homepage::new(banners(1))).unwrap();

        let start = html.find(r#"data-responsive=""#).unwrap() + r#"data-responsive=""#.len();
        let end = start + html[start..].find('"').unwrap();
        let json = html[start..end].replace("&quot;", "\"");
        let parsed: BTreeMap<String, ResponsiveSetting> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, one_item_responsive());
        assert_eq!(parsed["tablet"].breakpoint, Breakpoint { max: 1024, min: 464 });
    }

    #[test]
    fn test_banner_urls_are_escaped() {
        let page = Homepage::new(vec![Banner {
            image_url: r#"/x.jpg" onerror="alert(1)"#.to_string(),
        }]);
        let html = render_homepage(&page).unwrap();

        assert!(!html.contains(r#"onerror="alert"#));
        assert!(html.contains("&quot; onerror=&quot;"));
    }

    #[test]
    fn test_bundled_banners_parse() {
        let page = Homepage::bundled().unwrap();
        assert!(!page.banners.is_empty());
        assert!(page.banners.iter().all(|b| b.image_url.starts_with("/images/banners/")));

        let doc = render_document(&page).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert_eq!(
            doc.matches(r#"class="carousel-slide""#).count(),
            page.banners.len()
        );
    }
}
