//! Composite: files and folders form a tree, and both answer the same
//! `show_details` call. A folder simply forwards to its children one level
//! deeper.
//!
//! Run with: cargo run --bin complete_07_composite

use colored::Colorize;

pub trait FileSystemComponent {
    fn show_details(&self, depth: usize, out: &mut Vec<String>);

    fn render(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.show_details(0, &mut out);
        out
    }
}

pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemComponent for File {
    fn show_details(&self, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}- File: {}", "\t".repeat(depth), self.name));
    }
}

pub struct Folder {
    name: String,
    contents: Vec<Box<dyn FileSystemComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl FileSystemComponent + 'static) {
        self.contents.push(Box::new(component));
    }
}

impl FileSystemComponent for Folder {
    fn show_details(&self, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}- Folder: {}", "\t".repeat(depth), self.name));
        for component in &self.contents {
            component.show_details(depth + 1, out);
        }
    }
}

fn sample_tree() -> Folder {
    let mut folder1 = Folder::new("folder1");
    folder1.add(File::new("file1.txt"));
    folder1.add(File::new("file2.txt"));

    let mut folder3 = Folder::new("folder3");
    folder3.add(File::new("file4.txt"));

    let mut folder2 = Folder::new("folder2");
    folder2.add(File::new("file3.txt"));
    folder2.add(folder3);
    folder2.add(Folder::new("folder4"));

    let mut root = Folder::new("root");
    root.add(folder1);
    root.add(folder2);
    root
}

fn main() {
    for line in sample_tree().render() {
        if line.contains("Folder") {
            println!("{}", line.blue());
        } else {
            println!("{line}");
        }
    }
}
