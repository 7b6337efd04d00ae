use std::io::{self, Write};

use crate::error::Result;
use crate::messages::{Announcement, Messages};

/// Line sink shared by every constructor in the hierarchy.
///
/// Each line is written to `out` and also kept in a transcript so callers
/// can check which constructors ran, and in what order.
pub struct Console<W: Write> {
    out: W,
    messages: Messages,
    transcript: Vec<Announcement>,
    written: Vec<String>,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Messages::default())
    }
}

impl Console<Vec<u8>> {
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Messages::default())
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, messages: Messages) -> Self {
        Self {
            out,
            messages,
            transcript: Vec::new(),
            written: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn announce(&mut self, kind: Announcement) -> Result<()> {
        let text = self.messages.text(kind);
        writeln!(self.out, "{}", text)?;
        self.written.push(text.to_string());
        self.transcript.push(kind);
        Ok(())
    }

    pub fn transcript(&self) -> &[Announcement] {
        &self.transcript
    }

    pub fn count(&self, kind: Announcement) -> usize {
        self.transcript.iter().filter(|&&k| k == kind).count()
    }

    /// Texts exactly as they were written, even if the table changed since.
    pub fn lines(&self) -> Vec<&str> {
        self.written.iter().map(String::as_str).collect()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_writes_line() {
        let mut console = Console::buffered();
        console.announce(Announcement::Hello).unwrap();
        assert_eq!(console.output(), "helloworld\n");
        assert_eq!(console.transcript(), &[Announcement::Hello]);
    }

    #[test]
    fn test_lines_follow_messages() {
        let messages = Messages::default()
            .with_text(Announcement::Hello, "hey")
            .unwrap();
        let mut console = Console::buffered().with_messages(messages);
        console.announce(Announcement::Hello).unwrap();
        console.announce(Announcement::Hello).unwrap();
        assert_eq!(console.lines(), vec!["hey", "hey"]);
        assert_eq!(console.count(Announcement::Hello), 2);
        assert_eq!(console.count(Announcement::Base), 0);
    }

    #[test]
    fn test_lines_keep_text_after_message_swap() {
        let mut console = Console::buffered();
        console.announce(Announcement::Base).unwrap();

        let swapped = Messages::default()
            .with_text(Announcement::Base, "swapped")
            .unwrap();
        let mut console = console.with_messages(swapped);
        console.announce(Announcement::Base).unwrap();

        assert_eq!(
            console.lines(),
            vec!["Constructor of SomeBaseClass is called", "swapped"]
        );
        let output = console.output();
        assert_eq!(output.lines().collect::<Vec<_>>(), console.lines());
    }

    #[test]
    fn test_into_inner_returns_bytes() {
        let mut console = Console::buffered();
        console.announce(Announcement::Base).unwrap();
        let bytes = console.into_inner();
        assert_eq!(bytes, b"Constructor of SomeBaseClass is called\n".to_vec());
    }
}
