//! Prototype: copy an existing object without depending on how it was built.
//! In Rust the prototype interface is simply `Clone`.
//!
//! Run with: cargo run --bin complete_03_prototype

use colored::Colorize;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    content: String,
    pub author: String,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn display_info(&self) -> String {
        format!(
            "Title: {}\nContent: {}\nAuthor: {}",
            self.title, self.content, self.author
        )
    }
}

fn main() {
    let document = Document::new(
        "Cotizacion de productos",
        "Cotizacion de productos de la empresa XYZ",
        "Juan Perez",
    );
    println!("{}", "Original".blue());
    println!("{:#?}", document);
    println!("{}\n", document.display_info());

    let mut copy = document.clone();
    copy.title = "Cotizacion de servicios".to_string();

    println!("{}", "Clone (title changed)".blue());
    println!("{}\n", copy.display_info());

    println!("{}", "Original is untouched".green());
    println!("{}", document.display_info());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_equal() {
        let doc = Document::new("t", "c", "a");
        assert_eq!(doc.clone(), doc);
    }

    #[test]
    fn test_clone_is_independent() {
        let doc = Document::new("t", "c", "a");
        let mut copy = doc.clone();
        copy.title.push_str(" v2");
        copy.author = "b".into();

        assert_eq!(doc.title, "t");
        assert_eq!(doc.author, "a");
        assert_eq!(copy.content(), "c");
    }
}
