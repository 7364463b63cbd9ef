//! Proxy: the magic portal stands in front of the secret room and only lets
//! sufficiently experienced players through.
//!
//! Run with: cargo run --bin complete_11_proxy

use colored::Colorize;

pub const REQUIRED_LEVEL: u32 = 10;

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub level: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Admitted(Vec<String>),
    Denied(String),
}

pub trait Room {
    fn enter(&self, player: &Player) -> Entry;
}

pub struct SecretRoom;

impl Room for SecretRoom {
    fn enter(&self, player: &Player) -> Entry {
        Entry::Admitted(vec![
            format!("Welcome to the secret room {}!", player.name),
            "A grand reward awaits you!".to_string(),
        ])
    }
}

pub struct MagicPortal<R> {
    room: R,
}

impl<R: Room> MagicPortal<R> {
    pub fn new(room: R) -> Self {
        Self { room }
    }
}

impl<R: Room> Room for MagicPortal<R> {
    fn enter(&self, player: &Player) -> Entry {
        if player.level >= REQUIRED_LEVEL {
            return self.room.enter(player);
        }

        Entry::Denied(format!(
            "Access denied for {}. You need to be level {REQUIRED_LEVEL} to enter the secret room.",
            player.name
        ))
    }
}

fn main() {
    let portal = MagicPortal::new(SecretRoom);

    for player in [Player::new("John", 10), Player::new("Jane", 5)] {
        match portal.enter(&player) {
            Entry::Admitted(lines) => {
                println!("{}", lines[0].green());
                for line in &lines[1..] {
                    println!("{line}");
                }
            }
            Entry::Denied(reason) => println!("{}", reason.red()),
        }
        println!();
    }
}
