//! Widget shortcodes typed by authors into free-form HTML blocks.
//!
//! A shortcode is a bare prefix token followed by `__name(value)` calls, e.g.
//! `___widget_flashsale __pageSize(20) __url("/deals")`. Values are quoted
//! strings or bare integers. Calls may appear in any order; unknown calls and
//! trailing text are ignored.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const FLASH_SALE_PREFIX: &str = "___widget_flashsale";
pub const PRODUCT_RECOMMENDATION_PREFIX: &str = "___widget_product_recommendation";

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_FLASH_SALE_URL: &str = "/flash-sale";
const DEFAULT_RECOMMENDATION_LIMIT: u32 = 12;

static CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"__([A-Za-z][A-Za-z0-9_-]*)\(\s*(?:"([^"]*)"|'([^']*)'|(-?\d+))\s*\)"#)
        .expect("shortcode call pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Shortcode {
    FlashSale(FlashSale),
    ProductRecommendation(ProductRecommendation),
}

/// Request for a time-boxed promotional product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSale {
    pub page_size: u32,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Request for a personalised recommendation slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendation {
    pub id: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_mobile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CallValue {
    Text(String),
    Int(String),
}

impl CallValue {
    fn text(&self) -> String {
        match self {
            CallValue::Text(s) | CallValue::Int(s) => s.clone(),
        }
    }

    fn number(&self) -> Option<u32> {
        match self {
            CallValue::Text(s) | CallValue::Int(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

pub fn parse_shortcode(text: &str) -> Option<Shortcode> {
    let text = text.trim_start();
    if let Some(rest) = text.strip_prefix(PRODUCT_RECOMMENDATION_PREFIX) {
        return Some(Shortcode::ProductRecommendation(product_recommendation(
            rest,
        )));
    }
    if let Some(rest) = text.strip_prefix(FLASH_SALE_PREFIX) {
        return Some(Shortcode::FlashSale(flash_sale(rest)));
    }
    None
}

fn flash_sale(args: &str) -> FlashSale {
    let calls = collect_calls(args);
    FlashSale {
        page_size: calls
            .get("pageSize")
            .and_then(CallValue::number)
            .unwrap_or(DEFAULT_PAGE_SIZE),
        url: calls
            .get("url")
            .map(CallValue::text)
            .unwrap_or_else(|| DEFAULT_FLASH_SALE_URL.to_string()),
        title: calls.get("title").map(CallValue::text),
    }
}

fn product_recommendation(args: &str) -> ProductRecommendation {
    let calls = collect_calls(args);
    ProductRecommendation {
        id: calls.get("id").map(CallValue::text).unwrap_or_default(),
        limit: calls
            .get("limit")
            .and_then(CallValue::number)
            .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
        color: calls.get("color").map(CallValue::text),
        image: calls.get("image").map(CallValue::text),
        image_mobile: calls.get("image-mobile").map(CallValue::text),
    }
}

// First occurrence of each call name wins.
fn collect_calls(args: &str) -> HashMap<String, CallValue> {
    let mut calls = HashMap::new();
    for cap in CALL.captures_iter(args) {
        let Some(name) = cap.get(1) else {
            continue;
        };
        let value = if let Some(s) = cap.get(2).or_else(|| cap.get(3)) {
            CallValue::Text(s.as_str().to_string())
        } else if let Some(n) = cap.get(4) {
            CallValue::Int(n.as_str().to_string())
        } else {
            continue;
        };
        calls.entry(name.as_str().to_string()).or_insert(value);
    }
    calls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_flash_sale() {
        let parsed =
            parse_shortcode(r#"___widget_flashsale __pageSize(20) __url("/deals") __title("Flash Sale")"#);
        assert_eq!(
            parsed,
            Some(Shortcode::FlashSale(FlashSale {
                page_size: 20,
                url: "/deals".into(),
                title: Some("Flash Sale".into()),
            }))
        );
    }

    #[test]
    fn flash_sale_defaults() {
        let Some(Shortcode::FlashSale(sale)) = parse_shortcode(r#"___widget_flashsale __url("/deals")"#)
        else {
            panic!("expected flash sale");
        };
        assert_eq!(sale.page_size, 10);
        assert_eq!(sale.url, "/deals");
        assert!(sale.title.is_none());

        let Some(Shortcode::FlashSale(bare)) = parse_shortcode("___widget_flashsale") else {
            panic!("expected flash sale");
        };
        assert_eq!(bare.url, "/flash-sale");
    }

    #[test]
    fn calls_in_any_order_with_trailing_text() {
        let Some(Shortcode::FlashSale(sale)) = parse_shortcode(
            "  ___widget_flashsale __title('Late') junk __pageSize(5) more junk",
        ) else {
            panic!("expected flash sale");
        };
        assert_eq!(sale.page_size, 5);
        assert_eq!(sale.title.as_deref(), Some("Late"));
    }

    #[test]
    fn parses_product_recommendation() {
        let Some(Shortcode::ProductRecommendation(rec)) = parse_shortcode(
            r##"___widget_product_recommendation __id("home-top") __limit(6) __image-mobile("/m.png") __color("#fff")"##,
        ) else {
            panic!("expected recommendation");
        };
        assert_eq!(rec.id, "home-top");
        assert_eq!(rec.limit, 6);
        assert_eq!(rec.color.as_deref(), Some("#fff"));
        assert_eq!(rec.image_mobile.as_deref(), Some("/m.png"));
        assert!(rec.image.is_none());
    }

    #[test]
    fn recommendation_defaults() {
        let Some(Shortcode::ProductRecommendation(rec)) =
            parse_shortcode("___widget_product_recommendation")
        else {
            panic!("expected recommendation");
        };
        assert_eq!(rec.id, "");
        assert_eq!(rec.limit, 12);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let Some(Shortcode::FlashSale(sale)) =
            parse_shortcode("___widget_flashsale __pageSize(99999999999999)")
        else {
            panic!("expected flash sale");
        };
        assert_eq!(sale.page_size, 10);
    }

    #[test]
    fn ignores_ordinary_markup() {
        assert!(parse_shortcode("<p>___widget_flashsale</p>").is_none());
        assert!(parse_shortcode("").is_none());
    }
}
