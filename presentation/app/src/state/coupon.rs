use chrono::{Local, NaiveDate};

/// Promotional coupon shown on the cart screen. Never persisted; the list
/// is seeded relative to "today" so the last entry is always expired.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub discount_percentage: String,
    pub offer_title: String,
    pub coupon_code: String,
    pub expiry_date: NaiveDate,
}

impl Coupon {
    pub fn days_remaining_from(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn days_remaining(&self) -> i64 {
        self.days_remaining_from(Local::now().date_naive())
    }
}

pub fn seasonal_coupons(today: NaiveDate) -> Vec<Coupon> {
    vec![
        Coupon {
            discount_percentage: "15".to_string(),
            offer_title: "Summer sale".to_string(),
            coupon_code: "SUMMER15".to_string(),
            expiry_date: today + chrono::Days::new(10),
        },
        Coupon {
            discount_percentage: "20".to_string(),
            offer_title: "First order discount".to_string(),
            coupon_code: "WELCOME20".to_string(),
            expiry_date: today + chrono::Days::new(30),
        },
        Coupon {
            discount_percentage: "10".to_string(),
            offer_title: "Loyalty reward".to_string(),
            coupon_code: "LOYALTY10".to_string(),
            expiry_date: today + chrono::Days::new(7),
        },
        Coupon {
            discount_percentage: "10".to_string(),
            offer_title: "Loyalty reward".to_string(),
            coupon_code: "LOYALTY10".to_string(),
            expiry_date: today,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn days_remaining_counts_down_to_expiry() {
        let coupons = seasonal_coupons(today());

        assert_eq!(coupons[0].days_remaining_from(today()), 10);
        assert_eq!(coupons[3].days_remaining_from(today()), 0);
    }

    #[test]
    fn selection_by_code_finds_the_first_match() {
        let coupons = seasonal_coupons(today());

        let selected = coupons.iter().find(|c| c.coupon_code == "LOYALTY10");

        assert_eq!(selected.unwrap().days_remaining_from(today()), 7);
    }
}
