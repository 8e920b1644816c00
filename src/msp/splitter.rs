use std::borrow::Cow;

/// Separator between MSP entries
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Iterator over the raw text blocks of an MSP file.
///
/// Surrounding whitespace is trimmed before splitting, so empty or
/// whitespace-only input yields exactly one empty entry.
pub struct EntrySplitter<'a> {
    inner: std::str::Split<'a, &'static str>,
}

impl<'a> EntrySplitter<'a> {
    /// Split already-normalized text (`\n` line endings)
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.trim().split(ENTRY_SEPARATOR),
        }
    }
}

impl<'a> Iterator for EntrySplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`, borrowing when there
/// is nothing to do
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Number of entries in MSP text
pub fn count_entries(text: &str) -> usize {
    EntrySplitter::new(&normalize_line_endings(text)).count()
}

/// Split MSP text into entry blocks
pub fn split_entries(text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text);
    EntrySplitter::new(&normalized).map(str::to_string).collect()
}
