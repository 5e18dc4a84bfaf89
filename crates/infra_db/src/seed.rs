//! Database seeding
//!
//! Idempotent setup data: the admin account, the standard room and bed
//! layout, and the default menu. Rooms upsert by number, staff and menu
//! items insert only when absent, and beds are regenerated wholesale (the
//! bed inventory is delete-all + recreate by design, so run this before
//! guests exist or after a reset).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use tracing::info;

use domain_lodging::{standard_dorm_beds, standard_rooms};
use domain_orders::NewMenuItem;
use domain_staff::{NewStaff, StaffRole};

use crate::error::DatabaseError;
use crate::repositories::lodging::LodgingRepository;
use crate::repositories::menu::MenuRepository;
use crate::repositories::staff::StaffRepository;

/// What seeding created or refreshed
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SeedReport {
    pub admin_created: bool,
    pub rooms_upserted: usize,
    pub beds_created: u64,
    pub menu_items_created: usize,
}

const DEFAULT_MENU: &[(&str, &str, Decimal)] = &[
    // Breakfast
    ("Aloo Paratha", "Breakfast", dec!(80)),
    ("Poha", "Breakfast", dec!(50)),
    ("Idli Sambhar", "Breakfast", dec!(60)),
    ("Chole Bhature", "Breakfast", dec!(90)),
    ("Bread Omelette", "Breakfast", dec!(60)),
    ("Paneer Paratha", "Breakfast", dec!(90)),
    ("Upma", "Breakfast", dec!(50)),
    ("Toast Butter Jam", "Breakfast", dec!(40)),
    ("Dosa", "Breakfast", dec!(70)),
    // Lunch
    ("Veg Thali", "Lunch", dec!(150)),
    ("Dal Rice", "Lunch", dec!(100)),
    ("Rajma Chawal", "Lunch", dec!(120)),
    ("Paneer Butter Masala", "Lunch", dec!(160)),
    ("Mix Veg Curry + Roti", "Lunch", dec!(130)),
    ("Egg Curry + Rice", "Lunch", dec!(120)),
    ("Kadhi Chawal", "Lunch", dec!(100)),
    ("Jeera Rice + Dal", "Lunch", dec!(110)),
    // Dinner
    ("Roti Sabzi (4 Roti)", "Dinner", dec!(100)),
    ("Dal Makhani + Naan", "Dinner", dec!(140)),
    ("Paneer Tikka Masala", "Dinner", dec!(170)),
    ("Veg Biryani", "Dinner", dec!(150)),
    ("Chana Masala + Rice", "Dinner", dec!(110)),
    ("Aloo Gobi + Roti", "Dinner", dec!(100)),
    ("Palak Paneer + Naan", "Dinner", dec!(150)),
    // Snacks
    ("Maggi", "Snacks", dec!(40)),
    ("Samosa (2 pcs)", "Snacks", dec!(30)),
    ("Veg Sandwich", "Snacks", dec!(50)),
    ("French Fries", "Snacks", dec!(60)),
    ("Pakode", "Snacks", dec!(40)),
    ("Bread Pakora", "Snacks", dec!(40)),
    ("Momos (8 pcs)", "Snacks", dec!(70)),
    ("Spring Roll", "Snacks", dec!(60)),
    // Beverages
    ("Chai", "Beverages", dec!(20)),
    ("Coffee", "Beverages", dec!(30)),
    ("Lassi (Sweet)", "Beverages", dec!(50)),
    ("Lassi (Salted)", "Beverages", dec!(50)),
    ("Fresh Lime Soda", "Beverages", dec!(40)),
    ("Mango Shake", "Beverages", dec!(60)),
    ("Banana Shake", "Beverages", dec!(50)),
    ("Cold Coffee", "Beverages", dec!(50)),
    ("Water Bottle", "Beverages", dec!(20)),
];

/// Seeds everything: admin account, rooms, beds, and the menu.
pub async fn seed_all(pool: &PgPool) -> Result<SeedReport, DatabaseError> {
    let admin_created = seed_admin(pool).await?;
    let rooms_upserted = seed_rooms(pool).await?;
    let beds_created = seed_beds(pool).await?;
    let menu_items_created = seed_menu(pool).await?;

    let report = SeedReport {
        admin_created,
        rooms_upserted,
        beds_created,
        menu_items_created,
    };
    info!(?report, "seeding finished");
    Ok(report)
}

/// The default admin login. Clear text, as the login path expects.
pub async fn seed_admin(pool: &PgPool) -> Result<bool, DatabaseError> {
    let staff = StaffRepository::new(pool.clone());
    staff
        .create_if_absent(&NewStaff {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: StaffRole::Admin,
        })
        .await
}

pub async fn seed_rooms(pool: &PgPool) -> Result<usize, DatabaseError> {
    let lodging = LodgingRepository::new(pool.clone());
    let rooms = standard_rooms();
    for room in &rooms {
        lodging.upsert_room(room).await?;
    }
    Ok(rooms.len())
}

pub async fn seed_beds(pool: &PgPool) -> Result<u64, DatabaseError> {
    let lodging = LodgingRepository::new(pool.clone());
    lodging.regenerate_beds(&standard_dorm_beds()).await
}

pub async fn seed_menu(pool: &PgPool) -> Result<usize, DatabaseError> {
    let menu = MenuRepository::new(pool.clone());
    let mut created = 0;
    for (name, category, price) in DEFAULT_MENU {
        let inserted = menu
            .insert_if_absent(&NewMenuItem {
                name: (*name).to_string(),
                category: (*category).to_string(),
                price: *price,
            })
            .await?;
        if inserted {
            created += 1;
        }
    }
    Ok(created)
}
