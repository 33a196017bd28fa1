use indexmap::IndexSet;

/// Fixed dictionary of multi-word domain phrases.
///
/// Entries are lower-cased and de-duplicated, first occurrence wins the slot.
/// Matching is a plain substring test on lower-cased text with no word
/// boundaries, so `"java"` is found inside `"javascript"` and `"go"` inside
/// `"google"`.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    phrases: IndexSet<Box<str>>,
}

impl PhraseDictionary {
    pub fn new<I, T>(phrases: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .map(String::into_boxed_str)
            .collect();
        Self { phrases }
    }

    /// Dictionary entries contained in `lowered`, each at most once, in dictionary order.
    /// `lowered` must already be lower-case.
    pub fn find_in<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.phrases
            .iter()
            .map(|p| &**p)
            .filter(move |p| lowered.contains(*p))
    }

    #[inline]
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| &**p)
    }
}
