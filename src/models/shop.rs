use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use super::{order::Order, service_config::Category};

#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl CategoryInfo {
    fn system(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            created_by: Some("system".to_string()),
        }
    }
}

/// Categories every marketplace starts with. Admins may add more.
pub fn default_categories() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo::system("print", "Print & Fotocopy", "printer"),
        CategoryInfo::system("typing", "Jasa Ketik", "file-text"),
        CategoryInfo::system("photo", "Cetak Pas Foto", "camera"),
        CategoryInfo::system("banner", "Cetak Baliho / Banner", "image"),
        CategoryInfo::system("binding", "Penjilidan / Hard Cover", "book"),
        CategoryInfo::system("scan", "Scan Dokumen", "file-search"),
    ]
}

#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    /// Price of one monochrome page, in rupiah.
    #[typeshare(serialized_as = "number")]
    pub base_price: u64,
    pub open_hours: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Hour bounds of a shop's `"HH:MM - HH:MM"` opening hours. A missing or
/// unreadable opening hour reads as 0. A missing closing part reads as 23:59,
/// an unreadable one as 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl OpenHours {
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(" - ");
        let open_hour = parts.next().and_then(hour_of).unwrap_or(0);
        let close_hour = match parts.next() {
            Some(part) => hour_of(part).unwrap_or(24),
            None => 23,
        };
        Self {
            open_hour,
            close_hour,
        }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }
}

fn hour_of(part: &str) -> Option<u32> {
    part.trim().split(':').next()?.trim().parse::<u32>().ok()
}

impl Shop {
    pub fn offers(&self, category: &Category) -> bool {
        self.categories
            .iter()
            .any(|id| Category::from(id.clone()) == *category)
    }

    /// Recomputes `rating` and `reviews` from this shop's rated orders.
    pub fn recalculate_rating(&mut self, orders: &[Order]) {
        let ratings: Vec<f64> = orders
            .iter()
            .filter(|o| o.shop_id == self.id)
            .filter_map(|o| o.rating)
            .map(f64::from)
            .collect();

        self.reviews = ratings.len() as u32;
        self.rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        order::{CreateOrderRequest, OrderStatus, PaymentMethod},
        service_config::ServiceConfiguration,
    };

    fn shop() -> Shop {
        serde_json::from_str(
            r#"{
                "id": "shop-2",
                "name": "Fotocopy Barokah",
                "basePrice": 500,
                "openHours": "08:00 - 21:00",
                "categories": ["print", "photo", "banner", "binding"]
            }"#,
        )
        .unwrap()
    }

    fn rated_order(shop_id: &str, rating: Option<u8>) -> Order {
        let mut order = Order::from_request(CreateOrderRequest {
            user_id: "customer-001".to_string(),
            shop_id: shop_id.to_string(),
            category: "print".to_string(),
            service_detail: ServiceConfiguration::new("print"),
            file_name: None,
            pickup_date: "2026-10-20".to_string(),
            pickup_time: "10:00".to_string(),
            payment_method: PaymentMethod::Cod,
            total_price: 1500,
        });
        order.status = OrderStatus::Completed;
        order.rating = rating;
        order
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let shop = shop();
        assert!(shop.is_active);
        assert_eq!(shop.reviews, 0);
        assert_eq!(shop.rating, 0.0);
    }

    #[test]
    fn offers_matches_category_ids() {
        let shop = shop();
        assert!(shop.offers(&Category::Photo));
        assert!(shop.offers(&Category::Banner));
        assert!(!shop.offers(&Category::Typing));
        assert!(!shop.offers(&Category::Custom("laminating".to_string())));
    }

    #[test]
    fn open_hours_parse_with_fallbacks() {
        assert_eq!(
            OpenHours::parse("08:00 - 21:00"),
            OpenHours {
                open_hour: 8,
                close_hour: 21
            }
        );
        assert_eq!(
            OpenHours::parse("07:30"),
            OpenHours {
                open_hour: 7,
                close_hour: 23
            }
        );
        assert!(!OpenHours::parse("07:30").contains_hour(23));
        assert_eq!(
            OpenHours::parse("24 jam"),
            OpenHours {
                open_hour: 0,
                close_hour: 23
            }
        );
        assert_eq!(
            OpenHours::parse("08:00 - tutup"),
            OpenHours {
                open_hour: 8,
                close_hour: 24
            }
        );
        let hours = OpenHours::parse("08:00 - 21:00");
        assert!(hours.contains_hour(8));
        assert!(hours.contains_hour(20));
        assert!(!hours.contains_hour(21));
    }

    #[test]
    fn rating_is_average_of_rated_orders() {
        let mut shop = shop();
        let orders = vec![
            rated_order("shop-2", Some(5)),
            rated_order("shop-2", Some(4)),
            rated_order("shop-2", None),
            rated_order("shop-9", Some(1)),
        ];
        shop.recalculate_rating(&orders);
        assert_eq!(shop.reviews, 2);
        assert_eq!(shop.rating, 4.5);

        shop.recalculate_rating(&[]);
        assert_eq!(shop.reviews, 0);
        assert_eq!(shop.rating, 0.0);
    }

    #[test]
    fn default_catalog_maps_to_system_categories() {
        let categories = default_categories();
        assert_eq!(categories.len(), 6);
        assert!(
            categories
                .iter()
                .all(|c| !matches!(Category::from(c.id.as_str()), Category::Custom(_)))
        );
    }
}
