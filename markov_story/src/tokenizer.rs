use regex::Regex;

/// Splits text into maximal runs of non-whitespace. The information
/// separators U+001C..=U+001F count as whitespace too.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    re: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(r"[^\s\x1c-\x1f]+")?,
        })
    }

    /// Tokens borrow from `text` only, so they outlive the tokenizer.
    pub fn tokens<'r, 't>(&'r self, text: &'t str) -> impl Iterator<Item = &'t str> + 'r
    where
        't: 'r,
    {
        self.re.find_iter(text).map(|m| m.as_str())
    }
}
