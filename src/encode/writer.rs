use crate::constants::INDENT_WIDTH;

/// Append-only output buffer with a cache of indentation prefixes, one
/// per nesting level.
pub(crate) struct Writer {
    buffer: String,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn push_indent(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer.push_str(&self.indent_cache[depth]);
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = match self.indent_cache.last() {
                Some(prev) => {
                    let mut s = String::with_capacity(prev.len() + INDENT_WIDTH);
                    s.push_str(prev);
                    s.push_str(&" ".repeat(INDENT_WIDTH));
                    s
                }
                None => String::new(),
            };
            self.indent_cache.push(next);
        }
    }
}
