//! Decorator: equipment wrapped around a character. Each piece extends the
//! description and adjusts the stats of whatever it wraps.
//!
//! Run with: cargo run --bin complete_08_decorator_stats

use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ attack: {}, defense: {} }}", self.attack, self.defense)
    }
}

pub trait Character {
    fn description(&self) -> String;
    fn stats(&self) -> Stats;
}

pub struct BasicCharacter;

impl Character for BasicCharacter {
    fn description(&self) -> String {
        "Personaje básico".to_string()
    }

    fn stats(&self) -> Stats {
        Stats {
            attack: 25,
            defense: 25,
        }
    }
}

/// One equipment slot: a label plus the bonus it grants.
#[derive(Debug, Clone, Copy)]
pub struct Equipment {
    pub label: &'static str,
    pub attack: u32,
    pub defense: u32,
}

pub const HELMET: Equipment = Equipment {
    label: "Casco",
    attack: 0,
    defense: 5,
};
pub const SHIELD: Equipment = Equipment {
    label: "Escudo",
    attack: 0,
    defense: 10,
};
pub const SWORD: Equipment = Equipment {
    label: "Espada",
    attack: 7,
    defense: 0,
};
pub const RING: Equipment = Equipment {
    label: "Anillo Magico",
    attack: 3,
    defense: 0,
};

pub struct Equipped {
    character: Box<dyn Character>,
    equipment: Equipment,
}

impl Equipped {
    pub fn new(character: Box<dyn Character>, equipment: Equipment) -> Self {
        Self {
            character,
            equipment,
        }
    }
}

impl Character for Equipped {
    fn description(&self) -> String {
        format!(
            "{}\n * con {}",
            self.character.description(),
            self.equipment.label
        )
    }

    fn stats(&self) -> Stats {
        let base = self.character.stats();
        Stats {
            attack: base.attack + self.equipment.attack,
            defense: base.defense + self.equipment.defense,
        }
    }
}

pub fn equip(character: Box<dyn Character>, equipment: Equipment) -> Box<dyn Character> {
    Box::new(Equipped::new(character, equipment))
}

fn show(label: &str, character: &dyn Character) {
    println!("\n{} {}", label.blue(), character.description());
    println!("{} {}", "Estadísticas:".green(), character.stats());
}

fn main() {
    let mut character: Box<dyn Character> = Box::new(BasicCharacter);
    show("Personaje inicial:", character.as_ref());

    for (label, equipment) in [
        ("Con Casco:", HELMET),
        ("Con Escudo:", SHIELD),
        ("Con Espada:", SWORD),
        ("Con Anillo:", RING),
    ] {
        character = equip(character, equipment);
        show(label, character.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats() {
        assert_eq!(
            BasicCharacter.stats(),
            Stats {
                attack: 25,
                defense: 25
            }
        );
    }

    #[test]
    fn test_full_equipment() {
        let character = [HELMET, SHIELD, SWORD, RING]
            .into_iter()
            .fold(Box::new(BasicCharacter) as Box<dyn Character>, equip);

        assert_eq!(
            character.stats(),
            Stats {
                attack: 35,
                defense: 40
            }
        );
        assert_eq!(
            character.description(),
            "Personaje básico\n * con Casco\n * con Escudo\n * con Espada\n * con Anillo Magico"
        );
    }

    #[test]
    fn test_same_piece_stacks() {
        let character = equip(equip(Box::new(BasicCharacter), HELMET), HELMET);
        assert_eq!(character.stats().defense, 35);
    }
}
