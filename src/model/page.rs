use serde::Deserialize;

/// Background/foreground scheme of a page. Alternates by position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Dark,
    Light,
}

impl Variant {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Dim,
    Emphasis,
    Question,
    Struck,
}

/// One piece of page content, in reading order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Title {
        text: String,
    },
    Subtitle {
        text: String,
    },
    /// Small-caps kicker above a section
    Label {
        text: String,
    },
    Text {
        text: String,
        #[serde(default)]
        tone: Tone,
    },
    Editors {
        names: Vec<String>,
    },
    Link {
        text: String,
        href: String,
    },
    Note {
        text: String,
    },
    Newsletter {
        #[serde(default = "default_placeholder")]
        placeholder: String,
        #[serde(default = "default_button")]
        button: String,
    },
}

fn default_placeholder() -> String {
    "your@email.com".to_string()
}

fn default_button() -> String {
    "Subscribe".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PageDescriptor {
    /// Short name for the section jump buttons
    #[serde(default)]
    pub label: Option<String>,
    pub blocks: Vec<Block>,
    #[serde(skip)]
    pub variant: Variant,
}

impl PageDescriptor {
    pub fn has_newsletter(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Newsletter { .. }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub struck: bool,
}

/// Split text on `~~` markers into plain and struck-through runs.
/// An unmatched trailing marker is kept as literal text.
pub fn spans(text: &str) -> Vec<Span<'_>> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("~~") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("~~") else {
            break;
        };
        if start > 0 {
            out.push(Span {
                text: &rest[..start],
                struck: false,
            });
        }
        out.push(Span {
            text: &after[..end],
            struck: true,
        });
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        out.push(Span {
            text: rest,
            struck: false,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_alternates() {
        assert_eq!(Variant::for_index(0), Variant::Dark);
        assert_eq!(Variant::for_index(1), Variant::Light);
        assert_eq!(Variant::for_index(8), Variant::Dark);
    }

    #[test]
    fn test_spans() {
        assert_eq!(
            spans("doesn't need to ~~die~~.\nIt needs"),
            vec![
                Span { text: "doesn't need to ", struck: false },
                Span { text: "die", struck: true },
                Span { text: ".\nIt needs", struck: false },
            ]
        );
        assert_eq!(spans("plain"), vec![Span { text: "plain", struck: false }]);
        assert_eq!(spans("~~all~~"), vec![Span { text: "all", struck: true }]);
        assert_eq!(
            spans("a ~~open"),
            vec![Span { text: "a ~~open", struck: false }]
        );
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_block_deserializes_with_defaults() {
        #[derive(Deserialize)]
        struct Wrapper {
            blocks: Vec<Block>,
        }
        let w: Wrapper = toml::from_str(
            r#"
            [[blocks]]
            kind = "text"
            text = "Direction is."

            [[blocks]]
            kind = "text"
            text = "Hustle theology."
            tone = "struck"

            [[blocks]]
            kind = "newsletter"
            "#,
        )
        .expect("Failed to parse");
        assert_eq!(
            w.blocks,
            vec![
                Block::Text { text: "Direction is.".into(), tone: Tone::Plain },
                Block::Text { text: "Hustle theology.".into(), tone: Tone::Struck },
                Block::Newsletter {
                    placeholder: "your@email.com".into(),
                    button: "Subscribe".into(),
                },
            ]
        );
    }
}
