use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::errors::CheckoutError;
use super::model::CartLineItem;
use crate::domain::shared::value_objects::ItemId;

pub const DEFAULT_CHECKOUT_BASE_URL: &str = "https://www.amazon.com/gp/aws/cart/add.html";

static PRODUCT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("product path pattern is valid"));
static PRODUCT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{10}$").expect("product code pattern is valid"));

/// Extracts the 10 character product code from a marketplace reference,
/// which is either a product URL (`.../dp/<code>...`) or the bare code.
pub fn product_code(reference: &str) -> Option<String> {
    let reference = reference.trim();
    let code = PRODUCT_PATH
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map_or(reference, |m| m.as_str());

    PRODUCT_CODE.is_match(code).then(|| code.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLink {
    pub url: String,
    pub included: Vec<ItemId>,
    /// Lines left out because they carry no usable marketplace reference.
    pub skipped: Vec<ItemId>,
}

#[derive(Debug, Clone)]
pub struct CheckoutLinkBuilder {
    base_url: Url,
    associate_tag: Option<String>,
}

impl CheckoutLinkBuilder {
    pub fn new(base_url: Url, associate_tag: Option<String>) -> Result<Self, CheckoutError> {
        if base_url.cannot_be_a_base() {
            return Err(CheckoutError::InvalidBaseUrl);
        }
        Ok(Self {
            base_url,
            associate_tag: associate_tag.filter(|tag| !tag.trim().is_empty()),
        })
    }

    /// Builds the outbound cart URL with one `ASIN.n` / `Quantity.n` pair per
    /// qualifying line, numbered from 1.
    pub fn build(&self, lines: &[CartLineItem]) -> Result<CheckoutLink, CheckoutError> {
        let mut url = self.base_url.clone();
        let mut included = Vec::new();
        let mut skipped = Vec::new();

        {
            let mut query = url.query_pairs_mut();
            if let Some(tag) = &self.associate_tag {
                query.append_pair("AssociateTag", tag);
            }

            for line in lines {
                let Some(code) = line.marketplace_ref.as_deref().and_then(product_code) else {
                    skipped.push(line.id.clone());
                    continue;
                };

                let position = included.len() + 1;
                query.append_pair(&format!("ASIN.{}", position), &code);
                query.append_pair(&format!("Quantity.{}", position), &line.quantity.to_string());
                included.push(line.id.clone());
            }
        }

        if included.is_empty() {
            return Err(CheckoutError::NoEligibleItems);
        }

        Ok(CheckoutLink {
            url: url.to_string(),
            included,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Price;
    use chrono::Utc;

    fn line(id: &str, marketplace_ref: Option<&str>, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ItemId::new(id),
            name: format!("Item {}", id),
            description: None,
            category: None,
            marketplace_ref: marketplace_ref.map(str::to_string),
            price: Price::from_cents(999).unwrap(),
            created_at: Utc::now(),
            qr_code: None,
            quantity,
        }
    }

    fn builder() -> CheckoutLinkBuilder {
        CheckoutLinkBuilder::new(
            Url::parse(DEFAULT_CHECKOUT_BASE_URL).unwrap(),
            Some("your-tag-20".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn should_extract_code_from_product_url() {
        assert_eq!(
            product_code("https://www.amazon.com/Some-Drill/dp/B00ABCDE12/ref=sr_1_1"),
            Some("B00ABCDE12".to_string())
        );
    }

    #[test]
    fn should_accept_bare_code() {
        assert_eq!(product_code(" B00ABCDE12 "), Some("B00ABCDE12".to_string()));
    }

    #[test]
    fn should_reject_invalid_reference() {
        assert_eq!(product_code("b00abcde12"), None);
        assert_eq!(product_code("https://example.com/item/42"), None);
        assert_eq!(product_code(""), None);
    }

    #[test]
    fn should_build_link_with_repeated_item_parameters() {
        let lines = vec![
            line("1", Some("https://www.amazon.com/dp/B00ABCDE12"), 2),
            line("2", Some("B0XYZ98765"), 1),
        ];

        let link = builder().build(&lines).unwrap();

        assert_eq!(
            link.url,
            "https://www.amazon.com/gp/aws/cart/add.html?AssociateTag=your-tag-20\
             &ASIN.1=B00ABCDE12&Quantity.1=2&ASIN.2=B0XYZ98765&Quantity.2=1"
        );
        assert_eq!(link.included, vec![ItemId::new("1"), ItemId::new("2")]);
        assert!(link.skipped.is_empty());
    }

    #[test]
    fn should_skip_lines_without_reference() {
        let lines = vec![
            line("1", None, 3),
            line("2", Some("not-a-code"), 1),
            line("3", Some("B0XYZ98765"), 4),
        ];

        let link = builder().build(&lines).unwrap();

        assert!(link.url.ends_with("&ASIN.1=B0XYZ98765&Quantity.1=4"));
        assert_eq!(link.skipped, vec![ItemId::new("1"), ItemId::new("2")]);
    }

    #[test]
    fn should_abort_when_no_line_qualifies() {
        let lines = vec![line("1", None, 1)];

        assert_eq!(
            builder().build(&lines).unwrap_err(),
            CheckoutError::NoEligibleItems
        );
        assert_eq!(
            builder().build(&[]).unwrap_err(),
            CheckoutError::NoEligibleItems
        );
    }

    #[test]
    fn should_omit_blank_associate_tag() {
        let builder = CheckoutLinkBuilder::new(
            Url::parse(DEFAULT_CHECKOUT_BASE_URL).unwrap(),
            Some("  ".to_string()),
        )
        .unwrap();

        let link = builder.build(&[line("1", Some("B00ABCDE12"), 1)]).unwrap();

        assert_eq!(
            link.url,
            "https://www.amazon.com/gp/aws/cart/add.html?ASIN.1=B00ABCDE12&Quantity.1=1"
        );
    }
}
