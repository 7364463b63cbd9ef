//! Singleton: one shared instance for the whole program.
//!
//! The single `DragonBalls` is built once at the top of `main` and lent to
//! everyone who needs it; there is no lazily created global.
//!
//! Run with: cargo run --bin complete_05_singleton

use colored::Colorize;
use std::cell::RefCell;

pub const TOTAL_BALLS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    Collected(u8),
    AlreadyComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summon {
    Summoned,
    Missing(u8),
}

#[derive(Debug, Default)]
pub struct DragonBalls {
    balls_collected: u8,
}

impl DragonBalls {
    pub fn new() -> Self {
        println!("{}", "Dragon Balls created".yellow());
        Self::default()
    }

    pub fn balls_collected(&self) -> u8 {
        self.balls_collected
    }

    pub fn collect_ball(&mut self) -> Collect {
        if self.balls_collected < TOTAL_BALLS {
            self.balls_collected += 1;
            Collect::Collected(self.balls_collected)
        } else {
            Collect::AlreadyComplete
        }
    }

    /// Summoning uses up every ball.
    pub fn summon_shenlong(&mut self) -> Summon {
        if self.balls_collected == TOTAL_BALLS {
            self.balls_collected = 0;
            Summon::Summoned
        } else {
            Summon::Missing(TOTAL_BALLS - self.balls_collected)
        }
    }
}

/// A caller holding a borrowed handle to the shared instance.
pub struct Hunter<'a> {
    name: &'static str,
    balls: &'a RefCell<DragonBalls>,
}

impl<'a> Hunter<'a> {
    pub fn new(name: &'static str, balls: &'a RefCell<DragonBalls>) -> Self {
        Self { name, balls }
    }

    pub fn collect(&self) -> Collect {
        let outcome = self.balls.borrow_mut().collect_ball();
        match outcome {
            Collect::Collected(n) => {
                println!("{}", format!("{}: Dragon Ball collected: {n}", self.name).truecolor(255, 165, 0))
            }
            Collect::AlreadyComplete => {
                println!("{}", format!("{}: All Dragon Balls collected", self.name).red())
            }
        }
        outcome
    }

    pub fn summon(&self) -> Summon {
        let outcome = self.balls.borrow_mut().summon_shenlong();
        match outcome {
            Summon::Summoned => println!("{}", format!("{}: Shenlong summoned", self.name).green()),
            Summon::Missing(n) => println!(
                "{}",
                format!(
                    "{}: Not enough Dragon Balls to summon Shenlong, you need to collect {n} more",
                    self.name
                )
                .red()
            ),
        }
        outcome
    }
}

fn main() {
    // The one and only instance.
    let dragon_balls = RefCell::new(DragonBalls::new());

    let goku = Hunter::new("Goku", &dragon_balls);
    goku.collect();
    goku.collect();
    goku.collect();
    goku.summon();
    goku.collect();

    let vegeta = Hunter::new("Vegeta", &dragon_balls);
    goku.collect();
    println!("{:?}", dragon_balls.borrow());
    goku.collect();
    vegeta.collect();
    vegeta.summon();
    println!("{:?}", dragon_balls.borrow());
    vegeta.collect();
    println!("{:?}", dragon_balls.borrow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_stops_at_seven() {
        let mut balls = DragonBalls::default();
        for n in 1..=TOTAL_BALLS {
            assert_eq!(balls.collect_ball(), Collect::Collected(n));
        }
        assert_eq!(balls.collect_ball(), Collect::AlreadyComplete);
        assert_eq!(balls.balls_collected(), 7);
    }

    #[test]
    fn test_summon_requires_all_and_resets() {
        let mut balls = DragonBalls::default();
        balls.collect_ball();
        balls.collect_ball();
        assert_eq!(balls.summon_shenlong(), Summon::Missing(5));

        for _ in 0..5 {
            balls.collect_ball();
        }
        assert_eq!(balls.summon_shenlong(), Summon::Summoned);
        assert_eq!(balls.balls_collected(), 0);
    }

    #[test]
    fn test_hunters_share_one_instance() {
        let shared = RefCell::new(DragonBalls::default());
        let goku = Hunter::new("Goku", &shared);
        let vegeta = Hunter::new("Vegeta", &shared);

        for _ in 0..4 {
            goku.collect();
        }
        for _ in 0..3 {
            vegeta.collect();
        }

        assert_eq!(shared.borrow().balls_collected(), 7);
        assert_eq!(vegeta.summon(), Summon::Summoned);
        assert_eq!(goku.summon(), Summon::Missing(7));
    }
}
