use super::page::{Block, PageDescriptor, Variant};
use crate::error::ContentError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const EMBEDDED_BOOK: &str = include_str!("../../content/book.toml");

/// Where the newsletter form posts to
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FormTarget {
    pub action: String,
    /// Name of the form field that receives the email address
    pub entry_key: String,
}

/// The static "about" view
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct About {
    pub heading: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub signature: Option<String>,
}

/// The authored book: immutable once loaded.
#[derive(Clone, Debug, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub form: FormTarget,
    pub about: About,
    #[serde(default)]
    pages: Vec<PageDescriptor>,
}

impl Book {
    /// The book compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_BOOK, "embedded book")
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, &path.display().to_string())
    }

    pub fn from_toml(contents: &str, origin: &str) -> Result<Self, ContentError> {
        let mut book: Book = toml::from_str(contents).map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        book.validate()?;
        for (index, page) in book.pages.iter_mut().enumerate() {
            page.variant = Variant::for_index(index);
        }
        Ok(book)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.pages.is_empty() {
            return Err(ContentError::Empty);
        }
        if let Some(page) = self
            .pages
            .iter()
            .position(|p| p.label.as_deref().is_some_and(|l| l.trim().is_empty()))
        {
            return Err(ContentError::EmptyLabel { page });
        }
        let mut forms = self
            .pages
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_newsletter())
            .map(|(i, _)| i);
        if let (Some(first), Some(second)) = (forms.next(), forms.next()) {
            return Err(ContentError::DuplicateNewsletter { first, second });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&PageDescriptor> {
        self.pages.get(index)
    }

    pub fn variant(&self, index: usize) -> Variant {
        self.page(index)
            .map(|p| p.variant)
            .unwrap_or_else(|| Variant::for_index(index))
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.page(index).and_then(|p| p.label.as_deref())
    }

    /// Labelled pages, in book order
    pub fn sections(&self) -> impl Iterator<Item = (usize, &str)> {
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.label.as_deref().map(|label| (i, label)))
    }

    pub fn newsletter_page(&self) -> Option<usize> {
        self.pages.iter().position(|p| p.has_newsletter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        title = "T"

        [form]
        action = "https://example.com/form"
        entry_key = "entry.1"

        [about]
        heading = "About"
    "#;

    fn with_pages(pages: &str) -> String {
        format!("{MINIMAL}\n{pages}")
    }

    #[test]
    fn test_embedded_book() {
        let book = Book::embedded().expect("embedded book must parse");
        assert_eq!(book.title, "Theology of Ambition");
        assert_eq!(book.len(), 9);
        assert_eq!(book.label(0), None);
        assert_eq!(book.label(1), Some("Why"));
        assert_eq!(book.label(7), Some("Not This"));
        assert_eq!(book.label(8), None);
        assert_eq!(book.sections().count(), 7);
        assert_eq!(book.newsletter_page(), Some(8));
        assert_eq!(book.form.entry_key, "entry.765071488");
        assert!(book.about.signature.is_some());
    }

    #[test]
    fn test_variants_alternate_by_position() {
        let book = Book::embedded().expect("embedded book must parse");
        for i in 0..book.len() {
            let expected = if i % 2 == 0 { Variant::Dark } else { Variant::Light };
            assert_eq!(book.variant(i), expected);
        }
    }

    #[test]
    fn test_empty_book_rejected() {
        let err = Book::from_toml(MINIMAL, "test").unwrap_err();
        assert!(matches!(err, ContentError::Empty));
    }

    #[test]
    fn test_blank_label_rejected() {
        let src = with_pages(
            r#"
            [[pages]]
            blocks = []

            [[pages]]
            label = "  "
            blocks = []
            "#,
        );
        let err = Book::from_toml(&src, "test").unwrap_err();
        assert!(matches!(err, ContentError::EmptyLabel { page: 1 }));
    }

    #[test]
    fn test_second_newsletter_rejected() {
        let src = with_pages(
            r#"
            [[pages]]
            blocks = [{ kind = "newsletter" }]

            [[pages]]
            blocks = []

            [[pages]]
            blocks = [{ kind = "newsletter" }]
            "#,
        );
        let err = Book::from_toml(&src, "test").unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateNewsletter { first: 0, second: 2 }
        ));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = Book::from_toml("title = ", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = Book::load(Path::new("/nonexistent/folio/book.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
