//! Reply assembly

use lingo_bot_transport::Outbound;

/// Sections of one reply, joined by a blank line
#[derive(Debug, Default)]
pub(crate) struct Reply {
    sections: Vec<String>,
}

impl Reply {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Header templates end in a newline, so header + body reads as one block
    pub(crate) fn section(&mut self, header: String, body: &str) {
        self.sections.push(format!("{}{}", header, body));
    }

    pub(crate) fn notice(&mut self, text: String) {
        self.sections.push(text);
    }

    pub(crate) fn into_outbound(self) -> Outbound {
        Outbound::text(self.sections.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_joined() {
        let mut reply = Reply::new();
        reply.section("📝 You wrote 🇬🇧 (en):\n".to_string(), "hello");
        reply.notice("⚠️ Translation is unavailable right now.".to_string());
        assert_eq!(
            reply.into_outbound().text,
            "📝 You wrote 🇬🇧 (en):\nhello\n\n⚠️ Translation is unavailable right now."
        );
    }
}
