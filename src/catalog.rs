//! Search tasks and the built-in title list
//!
//! A `SearchTask` is one title plus its 1-based position in the input. The
//! list is immutable for the whole run and is handed to the batch runner
//! explicitly.

/// Titles resolved by the `booklinks` binary, in report order
///
/// Each carries a store hint so the first result tends to be a product page.
pub const DEFAULT_TITLES: &[&str] = &[
    "Wings of Fire by Dr. A.P.J. Abdul Kalam in rokomari",
    "Pather Panchali by Bibhutibhushan Bandyopadhyay in rokomari",
    "Feluda Series by Satyajit Ray in rokomari",
    "দুইশো তেরোর গল্প in rokomari",
    "ইন্দুবালা ভাতের হোটেল in rokomari",
    "যদ্যপি আমার গুরু in rokomari",
    "রবীন্দ্রনাথ এখানে কখনও খেতে আসেননি in rokomari",
    "আদর্শ হিন্দু হোটেল in rokomari",
    "Lalsalu by Syed Waliullah in rokomari",
    "The Diary of a Young Girl by Anne Frank in rokomari",
    "Misir Ali Series by Humayun Ahmed in rokomari",
    "Sapiens: A Brief History of Humankind by Yuval Noah Harari in rokomari",
    "Ikigai: The Japanese Secret to a Long and Happy Life by Héctor García in rokomari",
    "The Alchemist by Paulo Coelho in rokomari",
    "1984 by George Orwell in rokomari",
    "Before the Coffee Gets Cold by Toshikazu Kawaguchi in rokomari",
    "টাইম লুপ by খোন্দকার মেহেদী হাসান in rokomari",
    "দ্য হিচহাইকার'স গাইড টু দ্য গ্যালাক্সি by ডগলাস অ্যাডামস্ in rokomari",
    "Cosmos by Carl Sagan in rokomari",
    "The Little Prince by Antoine de Saint-Exupéry in rokomari",
    "The Secret Life of Bees by Sue Monk Kidd in rokomari",
    "Diary of a Wimpy Kid by Jeff Kinney in rokomari",
    "Wonder by R.J. Palacio in rokomari",
    "The Boy in the Striped Pajamas by John Boyne in rokomari",
    "বিজ্ঞানীদের কাণ্ডকারখানা by রাগিব হাসান in rokomari",
    "ভাইরে আপুরে!!! by শাব্বির আহসান in rokomari",
    "লার্নিং হাউ টু ফ্লাই by APJ Abdul Kalam in rokomari",
];

/// One title to resolve, with its 1-indexed position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTask {
    index: usize,
    title: String,
}

impl SearchTask {
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
        }
    }

    /// Number the titles from 1 in the order given
    #[must_use]
    pub fn from_titles<S: AsRef<str>>(titles: &[S]) -> Vec<Self> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Self::new(i + 1, title.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
