//! Minimal XML emission for element serialisation.
//!
//! Output is a bare fragment: no declaration, no attributes, no
//! namespaces. Compact mode emits everything on one line; pretty mode
//! indents nested elements by two spaces and keeps text inline inside its
//! element.

use quick_xml::escape::escape;

pub(crate) struct XmlWriter {
    out: String,
    pretty: bool,
    depth: usize,
}

impl XmlWriter {
    pub(crate) fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            pretty,
            depth: 0,
        }
    }

    /// Open a container element.
    pub(crate) fn open(&mut self, name: &str) {
        self.break_line();
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        self.depth += 1;
    }

    /// Close a container element opened with [`XmlWriter::open`].
    pub(crate) fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.break_line();
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    /// Emit an element whose only content is escaped text.
    pub(crate) fn leaf(&mut self, name: &str, text: &str) {
        self.break_line();
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        self.out.push_str(&escape(text));
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn break_line(&mut self) {
        if self.pretty && !self.out.is_empty() {
            self.out.push('\n');
            for _ in 0..self.depth {
                self.out.push_str("  ");
            }
        }
    }
}
