//! Deep Link Builder
//!
//! Builds `https://wa.me/<target>?text=<message>` links. Nothing here
//! opens the link; handing it to the browser/OS is the caller's job.

use shared::{MenuItem, MessagingTarget};

/// Base URL of the messaging deep link service
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Percent-encode a URL component
///
/// Same character set as JavaScript's `encodeURIComponent`: unreserved
/// characters and `! ' ( ) *` stay literal, spaces become `%20`, non-ASCII
/// is UTF-8 percent-encoded.
pub fn encode_component(value: &str) -> String {
    // Every '%' in the encoder output starts an escape triple, so these
    // replacements cannot match across two escapes.
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// `"Quero pedir: {item}"`, with `" (R$ {price})"` when a price is given
pub fn order_message(item_label: &str, price_label: Option<&str>) -> String {
    match price_label {
        Some(price) => format!("Quero pedir: {item_label} (R$ {price})"),
        None => format!("Quero pedir: {item_label}"),
    }
}

/// Delivery-area question for the given address
pub fn inquiry_message(address_line: &str) -> String {
    format!("Olá! Vocês fazem entrega no meu endereço? {address_line}")
}

/// Deep link carrying an arbitrary message body
pub fn message_link(target: &MessagingTarget, body: &str) -> String {
    format!(
        "{MESSAGING_BASE_URL}/{}?text={}",
        target.as_str(),
        encode_component(body)
    )
}

/// Deep link ordering one item
pub fn order_link(target: &MessagingTarget, item_label: &str, price_label: Option<&str>) -> String {
    message_link(target, &order_message(item_label, price_label))
}

/// Deep link asking whether the store delivers to `address_line`
pub fn inquiry_link(target: &MessagingTarget, address_line: &str) -> String {
    message_link(target, &inquiry_message(address_line))
}

/// Order link for a configured menu item
pub fn menu_item_link(target: &MessagingTarget, item: &MenuItem) -> String {
    order_link(target, &item.name, item.price_label.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> MessagingTarget {
        MessagingTarget::parse("5511999998888").unwrap()
    }

    fn decoded_text(link: &str) -> String {
        let (_, text) = link.split_once("?text=").unwrap();
        urlencoding::decode(text).unwrap().into_owned()
    }

    #[test]
    fn test_order_link_with_price() {
        assert_eq!(
            order_link(&target(), "Pizza", Some("39,90")),
            "https://wa.me/5511999998888?text=Quero%20pedir%3A%20Pizza%20(R%24%2039%2C90)"
        );
    }

    #[test]
    fn test_order_link_without_price() {
        let link = order_link(&target(), "Pizza", None);
        assert_eq!(
            link,
            "https://wa.me/5511999998888?text=Quero%20pedir%3A%20Pizza"
        );
        assert!(!decoded_text(&link).contains('('));
    }

    #[test]
    fn test_inquiry_link_encodes_accents() {
        let line = "Rua das Flores, 123, Centro, São Paulo - SP";
        let link = inquiry_link(&target(), line);

        assert!(link.starts_with("https://wa.me/5511999998888?text=Ol%C3%A1!%20Voc%C3%AAs%20"));
        assert!(!link.contains(' '));
        assert_eq!(decoded_text(&link), inquiry_message(line));
    }

    #[test]
    fn test_encode_component_marks() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("(x)!*'"), "(x)!*'");
        assert_eq!(encode_component("-_.~"), "-_.~");
        assert_eq!(encode_component("100%"), "100%25");
        assert_eq!(encode_component("%28"), "%2528");
        assert_eq!(encode_component("R$ & ?="), "R%24%20%26%20%3F%3D");
        assert_eq!(encode_component("ç"), "%C3%A7");
    }

    #[test]
    fn test_menu_item_link() {
        let item = MenuItem {
            name: "X-Burger".to_string(),
            description: None,
            price_label: Some("24,90".to_string()),
        };
        let link = menu_item_link(&target(), &item);
        assert_eq!(decoded_text(&link), "Quero pedir: X-Burger (R$ 24,90)");
    }
}
