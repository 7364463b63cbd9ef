//! Abstract Factory: create families of related objects (a burger and a
//! drink that belong together) without naming the concrete types.
//!
//! Run with: cargo run --bin complete_02_abstract_factory

use colored::Colorize;

// =============================================================================
// Products
// =============================================================================

pub trait Hamburger {
    fn name(&self) -> &'static str;

    fn prepare(&self) -> String {
        format!("Preparing {}", self.name())
    }
}

pub trait Drink {
    fn name(&self) -> &'static str;

    fn pour(&self) -> String {
        format!("Pouring {}", self.name())
    }
}

pub struct ChickenHamburger;
pub struct BeefHamburger;
pub struct Water;
pub struct Soda;

impl Hamburger for ChickenHamburger {
    fn name(&self) -> &'static str {
        "chicken hamburger"
    }
}

impl Hamburger for BeefHamburger {
    fn name(&self) -> &'static str {
        "beef hamburger"
    }
}

impl Drink for Water {
    fn name(&self) -> &'static str {
        "water"
    }
}

impl Drink for Soda {
    fn name(&self) -> &'static str {
        "soda"
    }
}

// =============================================================================
// Factories
// =============================================================================

pub trait RestaurantFactory {
    fn create_hamburger(&self) -> Box<dyn Hamburger>;
    fn create_drink(&self) -> Box<dyn Drink>;
}

pub struct FastFoodRestaurantFactory;
pub struct HealthyRestaurantFactory;

impl RestaurantFactory for FastFoodRestaurantFactory {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeefHamburger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Soda)
    }
}

impl RestaurantFactory for HealthyRestaurantFactory {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(ChickenHamburger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Water)
    }
}

/// The client only knows the factory trait.
pub fn order(factory: &impl RestaurantFactory) -> Vec<String> {
    let hamburger = factory.create_hamburger();
    let drink = factory.create_drink();
    vec![hamburger.prepare(), drink.pour()]
}

fn main() {
    println!("\n{}", "Order regular menu:".blue());
    for line in order(&FastFoodRestaurantFactory) {
        println!("{}", line.red());
    }

    println!("\n{}", "Order healthy menu:".green());
    for line in order(&HealthyRestaurantFactory) {
        println!("{}", line.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_food_family() {
        assert_eq!(
            order(&FastFoodRestaurantFactory),
            vec!["Preparing beef hamburger", "Pouring soda"]
        );
    }

    #[test]
    fn test_healthy_family() {
        assert_eq!(
            order(&HealthyRestaurantFactory),
            vec!["Preparing chicken hamburger", "Pouring water"]
        );
    }

    #[test]
    fn test_factories_behind_trait_objects() {
        let factories: Vec<Box<dyn RestaurantFactory>> =
            vec![Box::new(FastFoodRestaurantFactory), Box::new(HealthyRestaurantFactory)];
        let drinks: Vec<&str> = factories.iter().map(|f| f.create_drink().name()).collect();
        assert_eq!(drinks, vec!["soda", "water"]);
    }
}
