//! Facade: one simple entry point (`HomeTheaterFacade`) over a handful of
//! devices that must be driven in the right order.
//!
//! Run with: cargo run --bin complete_09_facade

use colored::Colorize;
use std::cell::RefCell;
use std::rc::Rc;

/// Every device appends what it did here so the sequence can be replayed.
pub type Journal = Rc<RefCell<Vec<String>>>;

fn record(journal: &Journal, line: impl Into<String>) {
    let line = line.into();
    println!("{line}");
    journal.borrow_mut().push(line);
}

pub struct Projector(Journal);
pub struct SoundSystem(Journal);
pub struct VideoPlayer(Journal);
pub struct PopcornMachine(Journal);

impl Projector {
    pub fn turn_on(&self) {
        record(&self.0, "Projector turned on");
    }

    pub fn turn_off(&self) {
        record(&self.0, "Projector turned off");
    }
}

impl SoundSystem {
    pub fn on(&self) {
        record(&self.0, "Sound system turned on");
    }

    pub fn off(&self) {
        record(&self.0, "Sound system turned off");
    }
}

impl VideoPlayer {
    pub fn on(&self) {
        record(&self.0, "Video player turned on");
    }

    pub fn play(&self, movie: &str) {
        record(&self.0, format!("Video player playing {movie}"));
    }

    pub fn stop(&self) {
        record(&self.0, "Video player stopped");
    }

    pub fn off(&self) {
        record(&self.0, "Video player turned off");
    }
}

impl PopcornMachine {
    pub fn popping_popcorn(&self) {
        record(&self.0, "Popcorn machine turned on");
    }

    pub fn turn_off_popping_popcorn(&self) {
        record(&self.0, "Popcorn machine turned off");
    }
}

pub struct HomeTheaterOptions {
    pub projector: Projector,
    pub sound_system: SoundSystem,
    pub video_player: VideoPlayer,
    pub popcorn_machine: PopcornMachine,
}

impl HomeTheaterOptions {
    pub fn wired_to(journal: &Journal) -> Self {
        Self {
            projector: Projector(journal.clone()),
            sound_system: SoundSystem(journal.clone()),
            video_player: VideoPlayer(journal.clone()),
            popcorn_machine: PopcornMachine(journal.clone()),
        }
    }
}

pub struct HomeTheaterFacade {
    projector: Projector,
    sound_system: SoundSystem,
    video_player: VideoPlayer,
    popcorn_machine: PopcornMachine,
}

impl HomeTheaterFacade {
    pub fn new(options: HomeTheaterOptions) -> Self {
        let HomeTheaterOptions {
            projector,
            sound_system,
            video_player,
            popcorn_machine,
        } = options;
        Self {
            projector,
            sound_system,
            video_player,
            popcorn_machine,
        }
    }

    pub fn watch_movie(&self, movie: &str) {
        println!("{}", "Preparing to watch movie...".magenta());
        self.projector.turn_on();
        self.sound_system.on();
        self.popcorn_machine.popping_popcorn();
        self.video_player.on();
        self.video_player.play(movie);
        println!("{}\n", "Enjoying the movie!".green());
    }

    pub fn end_movie(&self) {
        println!("{}", "Ending movie...".red());
        self.video_player.stop();
        self.popcorn_machine.turn_off_popping_popcorn();
        self.video_player.off();
        self.sound_system.off();
        self.projector.turn_off();
        println!("{}\n", "Movie ended!".green());
    }
}

fn main() {
    let journal = Journal::default();
    let home_theater = HomeTheaterFacade::new(HomeTheaterOptions::wired_to(&journal));

    home_theater.watch_movie("Terminator");
    home_theater.end_movie();
}
