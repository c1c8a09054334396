//! Structured product metadata extraction (JSON-LD)
//!
//! Product pages frequently embed schema.org Product blocks whose offers
//! carry size names and stock state. This gives size labels without
//! measurement ranges, hence a medium-confidence result. Malformed JSON
//! is a miss, never an error.

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::OnceLock;

use crate::model::SizeOption;

const OUT_OF_STOCK: &str = "https://schema.org/OutOfStock";

fn ld_json_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("script[type=\"application/ld+json\"]")
            .expect("ld+json selector is valid")
    })
}

/// Walk a JSON-LD value looking for a schema.org Product node.
///
/// Handles top-level arrays, `@graph` wrappers and `@type` given as
/// either a string or a list.
fn find_product(data: &Value) -> Option<&Value> {
    if let Some(items) = data.as_array() {
        return items.iter().find_map(find_product);
    }

    let type_matches = match data.get("@type") {
        Some(Value::String(t)) => t == "Product",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Product")),
        _ => false,
    };
    if type_matches {
        return Some(data);
    }

    data.get("@graph").and_then(find_product)
}

fn offer_list(offers: &Value) -> Vec<&Value> {
    match offers {
        Value::Array(list) => list.iter().collect(),
        Value::Object(_) => match offers.get("offers") {
            Some(Value::Array(list)) => list.iter().collect(),
            _ => vec![offers],
        },
        _ => Vec::new(),
    }
}

fn sizes_from_offers(offers: &Value) -> Vec<SizeOption> {
    let mut sizes = Vec::new();
    for offer in offer_list(offers) {
        let size = offer
            .get("size")
            .and_then(Value::as_str)
            .or_else(|| offer.get("name").and_then(Value::as_str));
        let Some(size) = size else { continue };
        if size.is_empty() || size.len() >= 20 {
            continue;
        }
        let available = offer.get("availability").and_then(Value::as_str) != Some(OUT_OF_STOCK);
        sizes.push(SizeOption {
            label: size.to_string(),
            available,
        });
    }
    sizes
}

/// Extract offered sizes from embedded JSON-LD product metadata.
///
/// Returns `None` when no block parses to a Product with usable offers.
pub fn extract_structured_sizes(doc: &Html) -> Option<Vec<SizeOption>> {
    for script in doc.select(ld_json_selector()) {
        let text: String = script.text().collect();
        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(err) => {
                log::debug!("skipping malformed ld+json block: {}", err);
                continue;
            }
        };

        let Some(product) = find_product(&data) else {
            continue;
        };
        let Some(offers) = product.get("offers") else {
            continue;
        };

        let sizes = sizes_from_offers(offers);
        if !sizes.is_empty() {
            return Some(sizes);
        }
    }
    None
}
