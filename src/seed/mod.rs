use rust_decimal_macros::dec;

use crate::models::Product;

/// The records every fresh process starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: dec!(999.99),
            in_stock: true,
        },
        Product {
            id: 2,
            name: "Mouse".to_string(),
            price: dec!(29.99),
            in_stock: true,
        },
        Product {
            id: 3,
            name: "Keyboard".to_string(),
            price: dec!(79.99),
            in_stock: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_distinct_ids() {
        let ids: Vec<i64> = seed_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn keyboard_starts_out_of_stock() {
        let keyboard = seed_products().into_iter().find(|p| p.id == 3).unwrap();
        assert_eq!(keyboard.name, "Keyboard");
        assert!(!keyboard.in_stock);
    }
}
