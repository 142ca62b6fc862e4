use super::aggregate::{FoodCategory, FoodItem, FoodStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    name: &str,
    category: FoodCategory,
    price: f64,
    stock: u32,
    status: FoodStatus,
    description: &str,
    sold: u32,
) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        category,
        price,
        stock,
        status,
        description: Some(description.to_string()),
        sold,
    }
}

pub(super) static FOOD_ITEMS: Lazy<Vec<FoodItem>> = Lazy::new(|| {
    use FoodCategory::*;
    use FoodStatus::*;

    vec![
        item(1, "Nasi Goreng Spesial", Makanan, 8.5, 15, Available, "Nasi goreng dengan telur, ayam, dan sayuran", 45),
        item(2, "Mie Ayam", Makanan, 6.0, 0, OutOfStock, "Mie ayam dengan bakso dan pangsit", 32),
        item(3, "Burger Beef", Makanan, 12.0, 8, Available, "Burger daging sapi dengan keju dan sayuran", 28),
        item(4, "Es Teh Manis", Minuman, 2.5, 25, Available, "Teh manis dingin segar", 89),
        item(5, "Jus Jeruk", Minuman, 4.0, 12, Available, "Jus jeruk segar tanpa gula tambahan", 56),
        item(6, "Kopi Hitam", Minuman, 3.5, 0, OutOfStock, "Kopi hitam premium", 67),
        item(7, "Keripik Kentang", Snack, 3.0, 20, Available, "Keripik kentang rasa original", 78),
        item(8, "Coklat Bar", Snack, 2.0, 30, Available, "Coklat batang premium", 92),
        item(9, "Kacang Goreng", Snack, 2.5, 0, Discontinued, "Kacang goreng pedas manis", 23),
    ]
});
