//! Literal texts printed by the hierarchy.
//!
//! Defaults match the classic demonstration output. A different table can be
//! parsed from a TOML string; any key left out keeps its default. Every table
//! is validated on the way in, so each text always prints as exactly one line.

use serde::Deserialize;

use crate::error::{ChainError, Result};

/// The kinds of line the hierarchy can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Announcement {
    Base,
    Middle,
    Derived,
    Hello,
}

impl Announcement {
    pub const ALL: [Announcement; 4] = [
        Announcement::Base,
        Announcement::Middle,
        Announcement::Derived,
        Announcement::Hello,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Announcement::Base => "base",
            Announcement::Middle => "middle",
            Announcement::Derived => "derived",
            Announcement::Hello => "hello",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    base: String,
    middle: String,
    derived: String,
    hello: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            base: "Constructor of SomeBaseClass is called".to_string(),
            middle: "Constructor of UnsuperChild is called".to_string(),
            derived: "Constructor of SuperChild is called".to_string(),
            hello: "helloworld".to_string(),
        }
    }
}

impl Messages {
    pub fn from_toml(content: &str) -> Result<Self> {
        let messages: Messages = toml::from_str(content)?;
        messages.validate()?;
        Ok(messages)
    }

    /// Replaces one text, rejecting anything that would not print as one line.
    pub fn with_text(mut self, kind: Announcement, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        check_text(kind, &text)?;
        *self.slot(kind) = text;
        Ok(self)
    }

    pub fn text(&self, kind: Announcement) -> &str {
        match kind {
            Announcement::Base => &self.base,
            Announcement::Middle => &self.middle,
            Announcement::Derived => &self.derived,
            Announcement::Hello => &self.hello,
        }
    }

    pub fn validate(&self) -> Result<()> {
        Announcement::ALL
            .iter()
            .try_for_each(|&kind| check_text(kind, self.text(kind)))
    }

    fn slot(&mut self, kind: Announcement) -> &mut String {
        match kind {
            Announcement::Base => &mut self.base,
            Announcement::Middle => &mut self.middle,
            Announcement::Derived => &mut self.derived,
            Announcement::Hello => &mut self.hello,
        }
    }
}

fn check_text(kind: Announcement, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ChainError::empty_message(kind.key()));
    }
    if text.contains(['\n', '\r']) {
        return Err(ChainError::multi_line_message(kind.key()));
    }
    Ok(())
}
