//! Opaque fragments of rendered documentation output.
//!
//! Builders treat `Content` as an accumulator: they obtain fragments from a
//! writer, append them, and never inspect what is inside. Writers own the
//! actual markup.

/// One composable unit of rendered output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Content {
    buf: String,
}

impl Content {
    /// An empty fragment, ready to accumulate children.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding already-rendered markup. Callers are responsible
    /// for any escaping; builders never construct these directly.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self { buf: markup.into() }
    }

    /// Append a child fragment.
    pub fn add(&mut self, child: Content) {
        self.buf.push_str(&child.buf);
    }

    /// Append already-rendered markup in place.
    pub fn push_raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
