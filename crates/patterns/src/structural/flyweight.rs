//! Flyweight: shops share immutable brand records through an explicit menu
//!
//! The menu is a registry handed to each shop at construction. Order counts
//! stay per shop.

use crate::error::PatternError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Shared, immutable brand record
#[derive(Debug, Clone, PartialEq)]
pub struct CheeseBrand {
    brand: String,
    cost: f64,
}

impl CheeseBrand {
    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Registry of flyweights shared between shops
#[derive(Debug, Default)]
pub struct CheeseMenu {
    brands: RefCell<HashMap<String, Rc<CheeseBrand>>>,
}

impl CheeseMenu {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Add `brand` at `cost`, or return the existing record if it matches.
    ///
    /// A stocked brand is never replaced.
    pub fn stock(&self, brand: &str, cost: f64) -> Result<Rc<CheeseBrand>, PatternError> {
        let mut brands = self.brands.borrow_mut();
        if let Some(existing) = brands.get(brand) {
            if (existing.cost - cost).abs() > f64::EPSILON {
                return Err(PatternError::ImmutableFlyweight(brand.to_string()));
            }
            return Ok(Rc::clone(existing));
        }

        debug!(brand, cost, "Stocking new brand");
        let record = Rc::new(CheeseBrand {
            brand: brand.to_string(),
            cost,
        });
        brands.insert(brand.to_string(), Rc::clone(&record));
        Ok(record)
    }

    pub fn get(&self, brand: &str) -> Option<Rc<CheeseBrand>> {
        self.brands.borrow().get(brand).cloned()
    }

    pub fn len(&self) -> usize {
        self.brands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.borrow().is_empty()
    }
}

#[derive(Debug)]
pub struct CheeseShop {
    menu: Rc<CheeseMenu>,
    orders: HashMap<String, u32>,
}

impl CheeseShop {
    pub fn new(menu: Rc<CheeseMenu>) -> Self {
        Self {
            menu,
            orders: HashMap::new(),
        }
    }

    pub fn stock_cheese(&self, brand: &str, cost: f64) -> Result<Rc<CheeseBrand>, PatternError> {
        self.menu.stock(brand, cost)
    }

    pub fn sell_cheese(&mut self, brand: &str, units: u32) -> Result<(), PatternError> {
        if self.menu.get(brand).is_none() {
            return Err(PatternError::UnknownBrand(brand.to_string()));
        }
        *self.orders.entry(brand.to_string()).or_insert(0) += units;
        Ok(())
    }

    pub fn total_units_sold(&self) -> u32 {
        self.orders.values().sum()
    }

    pub fn total_income(&self) -> f64 {
        self.orders
            .iter()
            .filter_map(|(brand, units)| self.menu.get(brand).map(|record| record.cost * f64::from(*units)))
            .sum()
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    let menu = CheeseMenu::new();
    let mut shop1 = CheeseShop::new(Rc::clone(&menu));
    let mut shop2 = CheeseShop::new(Rc::clone(&menu));

    shop1.stock_cheese("white", 1.25)?;
    shop1.stock_cheese("blue", 3.75)?;

    shop1.sell_cheese("blue", 3)?;
    shop2.sell_cheese("blue", 8)?;

    Ok(vec![
        format!("brands on shared menu: {}", menu.len()),
        format!("shop1: {} units, income {:.2}", shop1.total_units_sold(), shop1.total_income()),
        format!("shop2: {} units, income {:.2}", shop2.total_units_sold(), shop2.total_income()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_are_shared() {
        let menu = CheeseMenu::new();
        let shop1 = CheeseShop::new(Rc::clone(&menu));
        let shop2 = CheeseShop::new(Rc::clone(&menu));

        let first = shop1.stock_cheese("white", 1.25).unwrap();
        let second = shop2.stock_cheese("white", 1.25).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_restock_with_new_cost_rejected() {
        let menu = CheeseMenu::new();
        menu.stock("blue", 3.75).unwrap();

        assert_eq!(
            menu.stock("blue", 4.00),
            Err(PatternError::ImmutableFlyweight("blue".to_string()))
        );
        assert_eq!(menu.get("blue").unwrap().cost(), 3.75);
    }

    #[test]
    fn test_orders_are_per_shop() {
        let menu = CheeseMenu::new();
        menu.stock("blue", 3.75).unwrap();
        let mut shop1 = CheeseShop::new(Rc::clone(&menu));
        let mut shop2 = CheeseShop::new(Rc::clone(&menu));

        shop1.sell_cheese("blue", 3).unwrap();
        shop2.sell_cheese("blue", 8).unwrap();

        assert_eq!(shop1.total_units_sold(), 3);
        assert_eq!(shop2.total_units_sold(), 8);
        assert!((shop1.total_income() - 11.25).abs() < 1e-9);
        assert!((shop2.total_income() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_brand() {
        let mut shop = CheeseShop::new(CheeseMenu::new());
        assert_eq!(shop.sell_cheese("gouda", 1), Err(PatternError::UnknownBrand("gouda".to_string())));
        assert_eq!(shop.total_units_sold(), 0);
    }
}
