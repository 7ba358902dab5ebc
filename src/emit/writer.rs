//! Indent-aware string builder for YAML output.
//!
//! Mappings indent by 2 spaces. Block sequence items (`- `) sit at the
//! indentation of their parent key and their fields align one level in.

/// Indent-aware string builder that produces block-style YAML.
pub struct YamlWriter {
    buf: String,
    indent_level: usize,
    /// True if the current line has not yet been written to.
    at_line_start: bool,
    /// Next line opens a sequence item and gets the `- ` marker.
    pending_item: bool,
}

impl YamlWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            indent_level: 0,
            at_line_start: true,
            pending_item: false,
        }
    }

    /// Write a complete line (appends newline).
    pub fn line(&mut self, text: &str) {
        self.write_indent();
        if self.pending_item {
            self.buf.push_str("- ");
            self.pending_item = false;
            self.indent_level += 1;
        }
        self.buf.push_str(text);
        self.buf.push('\n');
        self.at_line_start = true;
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    /// Increase indent by one level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent by one level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write `key:` and increase indent for the nested mapping.
    pub fn mapping_open(&mut self, key: &str) {
        self.line(&format!("{}:", key));
        self.indent();
    }

    /// Decrease indent after a nested mapping.
    pub fn mapping_close(&mut self) {
        self.dedent();
    }

    /// Start a block sequence item; the next line carries the `- ` marker.
    pub fn begin_item(&mut self) {
        self.pending_item = true;
    }

    /// Close the current sequence item. An item with no lines is `- {}`.
    pub fn end_item(&mut self) {
        if self.pending_item {
            self.line("{}");
        }
        self.dedent();
    }

    /// Consume the writer and return the generated string.
    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self) {
        if self.at_line_start && self.indent_level > 0 {
            for _ in 0..self.indent_level {
                self.buf.push_str("  ");
            }
        }
        self.at_line_start = false;
    }
}

impl Default for YamlWriter {
    fn default() -> Self {
        Self::new()
    }
}
