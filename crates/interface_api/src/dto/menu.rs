//! Menu DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use domain_orders::{MenuItemPatch, NewMenuItem};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemBody {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

impl From<CreateMenuItemBody> for NewMenuItem {
    fn from(body: CreateMenuItemBody) -> Self {
        NewMenuItem {
            name: body.name,
            category: body.category,
            price: Decimal::try_from(body.price).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuItemBody {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl From<UpdateMenuItemBody> for MenuItemPatch {
    fn from(body: UpdateMenuItemBody) -> Self {
        MenuItemPatch {
            name: body.name,
            category: body.category,
            price: body.price,
            is_available: body.is_available,
        }
    }
}
