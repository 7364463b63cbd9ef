//! Bridge: the character (abstraction) and its ability (implementation)
//! vary independently; any character can wield any ability.
//!
//! Run with: cargo run --bin complete_06_bridge

use colored::{Color, Colorize};

// =============================================================================
// Implementation side
// =============================================================================

pub trait Ability {
    fn weapon(&self) -> &'static str;
    fn color(&self) -> Color;

    fn use_ability(&self) -> String {
        format!("Attack with {}", self.weapon())
    }
}

pub struct SwordAttack;
pub struct AxeAttack;
pub struct MagicSpell;
pub struct FireBallSpell;

impl Ability for SwordAttack {
    fn weapon(&self) -> &'static str {
        "a sword"
    }

    fn color(&self) -> Color {
        Color::Blue
    }
}

impl Ability for AxeAttack {
    fn weapon(&self) -> &'static str {
        "an axe"
    }

    fn color(&self) -> Color {
        Color::Green
    }
}

impl Ability for MagicSpell {
    fn weapon(&self) -> &'static str {
        "a magic spell"
    }

    fn color(&self) -> Color {
        Color::Magenta
    }
}

impl Ability for FireBallSpell {
    fn weapon(&self) -> &'static str {
        "a fire ball spell"
    }

    fn color(&self) -> Color {
        Color::Red
    }
}

// =============================================================================
// Abstraction side
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Warrior,
    Mage,
}

impl Class {
    fn intro(self) -> &'static str {
        match self {
            Class::Warrior => "The warrior is ready to fight",
            Class::Mage => "The mage is ready to cast spells",
        }
    }
}

pub struct Character {
    class: Class,
    ability: Box<dyn Ability>,
}

impl Character {
    pub fn new(class: Class, ability: impl Ability + 'static) -> Self {
        Self {
            class,
            ability: Box::new(ability),
        }
    }

    pub fn warrior(ability: impl Ability + 'static) -> Self {
        Self::new(Class::Warrior, ability)
    }

    pub fn mage(ability: impl Ability + 'static) -> Self {
        Self::new(Class::Mage, ability)
    }

    pub fn set_ability(&mut self, ability: impl Ability + 'static) {
        self.ability = Box::new(ability);
    }

    pub fn ability(&self) -> &dyn Ability {
        self.ability.as_ref()
    }

    pub fn perform_ability(&self) -> Vec<String> {
        vec![self.class.intro().to_string(), self.ability.use_ability()]
    }
}

fn perform(character: &Character) {
    let lines = character.perform_ability();
    println!("\n{}", lines[0]);
    println!("{}", lines[1].color(character.ability().color()));
}

fn main() {
    let mut warrior = Character::warrior(SwordAttack);
    perform(&warrior);
    warrior.set_ability(AxeAttack);
    perform(&warrior);

    let mut mage = Character::mage(MagicSpell);
    perform(&mage);
    mage.set_ability(FireBallSpell);
    perform(&mage);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_swaps_ability() {
        let mut warrior = Character::warrior(SwordAttack);
        assert_eq!(
            warrior.perform_ability(),
            vec!["The warrior is ready to fight", "Attack with a sword"]
        );

        warrior.set_ability(AxeAttack);
        assert_eq!(warrior.perform_ability()[1], "Attack with an axe");
    }

    #[test]
    fn test_any_class_takes_any_ability() {
        let mage_with_sword = Character::mage(SwordAttack);
        assert_eq!(
            mage_with_sword.perform_ability(),
            vec!["The mage is ready to cast spells", "Attack with a sword"]
        );
    }
}
