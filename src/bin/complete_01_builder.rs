//! Builder: assemble a complex value step by step.
//!
//! Run with: cargo run --bin complete_01_builder

use colored::Colorize;
use std::fmt;

// =============================================================================
// Product
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
}

impl Default for Computer {
    fn default() -> Self {
        Self {
            cpu: "CPU - not defined".to_string(),
            ram: "RAM - not defined".to_string(),
            storage: "Storage - not defined".to_string(),
            gpu: None,
        }
    }
}

impl Computer {
    pub fn display_config(&self) -> String {
        format!(
            "PC config:\n    CPU: {}\n    RAM: {}\n    Storage: {}\n    GPU: {}",
            self.cpu,
            self.ram,
            self.storage,
            self.gpu.as_deref().unwrap_or("not defined")
        )
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_config())
    }
}

// =============================================================================
// Consuming builder
// =============================================================================

#[derive(Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = cpu.into();
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = ram.into();
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.computer.storage = storage.into();
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Computer {
        self.computer
    }
}

fn main() {
    let basic = ComputerBuilder::new()
        .cpu("Intel Core i7")
        .ram("16GB")
        .storage("256GB")
        .build();

    println!("{}", "Basic Computer".blue());
    println!("{basic}\n");

    // Setter order does not matter.
    let gaming = ComputerBuilder::new()
        .cpu("AMD Ryzen 5")
        .gpu("NVIDIA GeForce RTX 3060")
        .ram("32GB")
        .storage("1TB")
        .build();

    println!("{}", "Gaming Computer".blue());
    println!("{gaming}");
}
