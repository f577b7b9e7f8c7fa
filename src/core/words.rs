/// Ordered word collection that tracks its longest entry
use crate::core::layout::Layout;
use crate::core::renderer;

/// Append-only list of words. `max_length` is kept in step with every append
/// so renderers can size their fields without rescanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    max_length: usize,
}

/// Length of a word as the renderers measure it.
pub(crate) fn word_len(word: &str) -> usize {
    word.chars().count()
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of words in order.
    pub fn append<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            self.max_length = self.max_length.max(word_len(&word));
            self.words.push(word);
        }
    }

    /// Length of the longest word held, 0 when empty.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every word and start over.
    pub fn clear(&mut self) {
        self.words.clear();
        self.max_length = 0;
    }

    /// Render with the layout's default width.
    pub fn render(&self, layout: Layout) -> String {
        renderer::render(self, layout, None)
    }

    /// Render, passing `width` through to the row layout.
    pub fn render_with_width(&self, layout: Layout, width: Option<usize>) -> String {
        renderer::render(self, layout, width)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append(iter);
        list
    }
}
