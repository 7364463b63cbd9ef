//! Flyweight: thousands of map pins, a handful of icons. The factory keeps
//! one `LocationMarker` per type and every pin holds an `Rc` to it.
//!
//! Run with: cargo run --bin complete_10_flyweight

use colored::Colorize;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// Shared, intrinsic state.
#[derive(Debug, PartialEq, Eq)]
pub struct LocationMarker {
    kind: String,
    icon_image: String,
}

impl LocationMarker {
    pub fn icon_image(&self) -> &str {
        &self.icon_image
    }

    pub fn display(&self, at: Coordinates) -> String {
        format!(
            "Coords: {} en {}, {} with icon [{}]",
            self.kind, at.x, at.y, self.icon_image
        )
    }
}

#[derive(Debug, Default)]
pub struct LocationFactory {
    icons: HashMap<String, Rc<LocationMarker>>,
}

impl LocationFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location_icon(&mut self, kind: &str) -> Rc<LocationMarker> {
        let marker = self.icons.entry(kind.to_string()).or_insert_with(|| {
            println!(
                "{}",
                format!("| Creating new instance of icon for {kind} |").truecolor(255, 165, 0)
            );
            Rc::new(LocationMarker {
                kind: kind.to_string(),
                icon_image: format!("image_of_{}.png", kind.to_lowercase()),
            })
        });
        Rc::clone(marker)
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }
}

/// Extrinsic state: where this particular pin sits.
pub struct MapLocation {
    coordinates: Coordinates,
    icon: Rc<LocationMarker>,
}

impl MapLocation {
    pub fn new(x: i32, y: i32, icon: Rc<LocationMarker>) -> Self {
        Self {
            coordinates: Coordinates { x, y },
            icon,
        }
    }

    pub fn display(&self) -> String {
        self.icon.display(self.coordinates)
    }
}

fn main() {
    let mut factory = LocationFactory::new();
    let pins = [
        (10, 20, "house"),
        (100, 200, "school"),
        (240, 10, "house"),
        (10, 20, "hospital"),
        (3450, 320, "house"),
        (510, 520, "house"),
        (610, 620, "park"),
        (610, 620, "park"),
        (710, 720, "restaurant"),
        (1010, 1020, "house"),
        (1110, 1120, "house"),
        (1210, 1220, "house"),
        (1310, 1320, "house"),
        (1410, 1420, "house"),
    ];

    let locations: Vec<MapLocation> = pins
        .iter()
        .map(|&(x, y, kind)| MapLocation::new(x, y, factory.location_icon(kind)))
        .collect();

    for location in &locations {
        println!("{}", location.display().green());
    }

    println!(
        "\n{} locations share {} icons",
        locations.len(),
        factory.icon_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_shares_one_marker() {
        let mut factory = LocationFactory::new();
        let a = factory.location_icon("house");
        let b = factory.location_icon("house");
        let c = factory.location_icon("park");

        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(factory.icon_count(), 2);
        assert_eq!(Rc::strong_count(&a), 3);
    }

    #[test]
    fn test_icon_name_is_lowercased() {
        let mut factory = LocationFactory::new();
        assert_eq!(factory.location_icon("School").icon_image(), "image_of_school.png");
    }

    #[test]
    fn test_display_uses_extrinsic_coordinates() {
        let mut factory = LocationFactory::new();
        let icon = factory.location_icon("house");
        let here = MapLocation::new(1, 2, Rc::clone(&icon));
        let there = MapLocation::new(3, 4, icon);

        assert_eq!(here.display(), "Coords: house en 1, 2 with icon [image_of_house.png]");
        assert_eq!(there.display(), "Coords: house en 3, 4 with icon [image_of_house.png]");
    }
}
