//! Menu items and the static fallback price table

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prices for legacy name-only order items.
///
/// Orders placed before items carried prices reference the menu by name
/// only; this table is the pricing those orders were sold under.
static FALLBACK_MENU: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        ("Burger", dec!(150)),
        ("Maggi", dec!(100)),
        ("Pasta", dec!(250)),
        ("Coke", dec!(50)),
        ("Water Bottle", dec!(20)),
        ("Tea", dec!(20)),
        ("Coffee", dec!(50)),
        ("Sandwich", dec!(120)),
    ])
});

/// Price for a legacy name-only item, if the name is known.
pub fn fallback_price(name: &str) -> Option<Decimal> {
    FALLBACK_MENU.get(name).copied()
}

/// An orderable menu item
///
/// Independent of guests and orders; order payloads reference menu items by
/// name only, so edits and deletions here never touch past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Free text; conventionally Breakfast/Lunch/Dinner/Snacks/Beverages
    pub category: String,
    pub price: Decimal,
    pub is_available: bool,
}

/// Menu item fields at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: Decimal,
}

/// Staff edits to a menu item; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl MenuItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.is_available.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_the_legacy_menu() {
        assert_eq!(fallback_price("Burger"), Some(dec!(150)));
        assert_eq!(fallback_price("Tea"), Some(dec!(20)));
        assert_eq!(fallback_price("Gulab Jamun"), None);
    }
}
