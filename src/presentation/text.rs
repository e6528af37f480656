//! Text bodies of shapes.

/// Character formatting read from a run's `a:rPr`.
///
/// Every attribute is optional; absent or malformed values stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFont {
    /// Latin typeface
    pub name: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// Solid fill colour as `RRGGBB`
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub font: RunFont,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: RunFont::default(),
        }
    }
}

/// A paragraph. Line breaks (`a:br`) are stored as runs holding `"\n"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// The `p:txBody` of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Build a body with one single-run paragraph per line of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text
                .split('\n')
                .map(|line| Paragraph {
                    runs: vec![Run::new(line)],
                })
                .collect(),
        }
    }

    /// Paragraph texts joined with `"\n"`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Font of the first run of the first paragraph, if there is one.
    pub fn first_run_font(&self) -> Option<&RunFont> {
        self.paragraphs.first()?.runs.first().map(|run| &run.font)
    }
}
