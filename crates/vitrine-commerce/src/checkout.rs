//! Order message and WhatsApp deep-link building.
//!
//! Checkout hands the order off to a messaging app instead of a payment
//! step. The backend normally supplies the number and a pre-built
//! message; when it fails the client builds both from its own cart copy
//! and a configured fallback number.

use crate::cart::CartLine;
use crate::money::Money;

/// Number used when no WhatsApp number is configured or the backend's
/// number strips down to nothing.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5511999999999";

/// Build the client-side order message from the cart lines.
///
/// One bullet line per item with its subtotal, a bold total, then the
/// customer name. This is the fallback text; the confirmed path uses the
/// backend's message verbatim.
pub fn order_message(lines: &[CartLine], total: Money, customer_name: &str) -> String {
    let mut out = String::from("Hello! I would like to place an order:\n\n");
    for line in lines {
        out.push_str(&format!(
            "\u{2022} {}x {} - {}\n",
            line.quantity,
            line.name,
            line.subtotal().display()
        ));
    }
    out.push_str(&format!("\n*Total: {}*\n\n", total.display()));
    out.push_str(&format!("Name: {}", customer_name.trim()));
    out
}

/// Build a `wa.me` deep link for a number and message.
///
/// Non-digit characters are stripped from the number; a number that
/// strips down to nothing falls back to [`DEFAULT_WHATSAPP_NUMBER`].
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = if digits.is_empty() {
        DEFAULT_WHATSAPP_NUMBER
    } else {
        &digits
    };
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn line(name: &str, cents: i64, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(name),
            name: name.to_string(),
            unit_price: Money::new(cents, Currency::BRL),
            image_url: None,
            quantity,
        }
    }

    #[test]
    fn test_order_message_structure() {
        let lines = vec![line("Brigadeiro", 350, 2), line("Cheesecake", 5000, 1)];
        let total = Money::new(5700, Currency::BRL);
        let message = order_message(&lines, total, "  Maria  ");

        assert!(message.starts_with("Hello! I would like to place an order:"));
        assert!(message.contains("\u{2022} 2x Brigadeiro - R$7.00"));
        assert!(message.contains("\u{2022} 1x Cheesecake - R$50.00"));
        assert!(message.contains("*Total: R$57.00*"));
        assert!(message.ends_with("Name: Maria"));
    }

    #[test]
    fn test_whatsapp_link_strips_non_digits() {
        let link = whatsapp_link("+55 (11) 99999-9999", "hi");
        assert_eq!(link, "https://wa.me/5511999999999?text=hi");
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("5511999999999", "order: 2x bolo & more");
        assert!(link.starts_with("https://wa.me/5511999999999?text="));
        assert!(!link.contains(' '));
        assert!(link.contains("order%3A%202x%20bolo%20%26%20more"));
    }

    #[test]
    fn test_empty_number_uses_default() {
        let link = whatsapp_link("n/a", "hi");
        assert_eq!(
            link,
            format!("https://wa.me/{}?text=hi", DEFAULT_WHATSAPP_NUMBER)
        );
    }
}
