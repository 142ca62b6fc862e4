use super::seed::FOOD_ITEMS;
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use crate::shared::query::StaticRegistry;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    /// Menu category. Labels are the menu's own (Indonesian) names.
    FoodCategory {
        Makanan => ("makanan", "Makanan"),
        Minuman => ("minuman", "Minuman"),
        Snack => ("snack", "Snack"),
    }
}

crate::enums::closed_set! {
    FoodStatus {
        Available => ("available", "Available"),
        OutOfStock => ("out_of_stock", "Out of Stock"),
        Discontinued => ("discontinued", "Discontinued"),
    }
}

/// Item on the food and drinks menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub category: FoodCategory,
    pub price: f64,
    pub stock: u32,
    pub status: FoodStatus,
    pub description: Option<String>,
    pub sold: u32,
}

impl FoodItem {
    pub fn stock_label(&self) -> String {
        format!("{} items", self.stock)
    }

    pub fn sold_label(&self) -> String {
        format!("{} sold", self.sold)
    }
}

/// Tabs split the menu by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodTab {
    #[default]
    All,
    Makanan,
    Minuman,
    Snack,
}

impl FoodTab {
    /// Choosing "All" in the status filter also resets the tab.
    pub fn after_status_change(self, status: Choice<FoodStatus>) -> Self {
        if status.is_all() {
            FoodTab::All
        } else {
            self
        }
    }
}

impl TabBucket for FoodTab {
    type Key = FoodCategory;

    fn tabs() -> &'static [Self] {
        &[FoodTab::All, FoodTab::Makanan, FoodTab::Minuman, FoodTab::Snack]
    }

    fn label(&self) -> &'static str {
        match self {
            FoodTab::All => "All",
            FoodTab::Makanan => "Makanan",
            FoodTab::Minuman => "Minuman",
            FoodTab::Snack => "Snack",
        }
    }

    fn members(&self) -> Option<&'static [FoodCategory]> {
        match self {
            FoodTab::All => None,
            FoodTab::Makanan => Some(&[FoodCategory::Makanan]),
            FoodTab::Minuman => Some(&[FoodCategory::Minuman]),
            FoodTab::Snack => Some(&[FoodCategory::Snack]),
        }
    }
}

impl Predicate<FoodItem> for FoodTab {
    fn admits(&self, record: &FoodItem) -> bool {
        self.contains(&record.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoodFilters {
    pub status: Choice<FoodStatus>,
}

impl Predicate<FoodItem> for FoodFilters {
    fn admits(&self, record: &FoodItem) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for FoodItem {
    type Tab = FoodTab;
    type Filters = FoodFilters;

    const RESOURCE: &'static str = "food item";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

pub fn registry() -> StaticRegistry<FoodItem> {
    StaticRegistry::new(FOOD_ITEMS.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, ListQuery};
    use crate::shared::query::ResourceQuery;

    fn all() -> &'static [FoodItem] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 9);
        let item = registry().get_by_id("6").unwrap();
        assert_eq!(item.name, "Kopi Hitam");
        assert!(registry().get_by_id("Kopi Hitam").is_err());
        assert_eq!(item.status, FoodStatus::OutOfStock);
        assert_eq!(item.sold_label(), "67 sold");
    }

    #[test]
    fn test_category_tab_and_status() {
        let query = ListQuery::<FoodItem>::new()
            .with_tab(FoodTab::Minuman)
            .with_filters(FoodFilters {
                status: Choice::Only(FoodStatus::Available),
            });
        let names: Vec<String> = filter_records(all(), &query)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Es Teh Manis", "Jus Jeruk"]);
    }

    #[test]
    fn test_search_description() {
        let result = filter_records(all(), &ListQuery::<FoodItem>::new().with_search("AYAM"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_status_all_resets_tab() {
        assert_eq!(FoodTab::Snack.after_status_change(Choice::All), FoodTab::All);
        assert_eq!(
            FoodTab::Snack.after_status_change(Choice::Only(FoodStatus::Discontinued)),
            FoodTab::Snack
        );
    }
}
