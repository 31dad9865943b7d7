use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutputBlock {
    Separator,
    Title(String),
    Text(String),
    Event(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal rule between turns. Never doubled.
    pub fn separator(&mut self) {
        if !matches!(self.blocks.last(), Some(OutputBlock::Separator)) {
            self.blocks.push(OutputBlock::Separator);
        }
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// All non-separator lines, joined with newlines.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Separator => None,
                OutputBlock::Title(s) | OutputBlock::Text(s) | OutputBlock::Event(s) => {
                    Some(s.as_str())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }
}
