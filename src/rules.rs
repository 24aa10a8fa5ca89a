use std::collections::BTreeMap;

const DEFAULT_SUBSTITUTIONS: [(char, char); 6] = [
    ('e', '3'),
    ('a', '4'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

const DEFAULT_YEARS: [&str; 2] = ["2024", "2025"];
const DEFAULT_NUMBERS: [&str; 4] = ["123", "321", "007", "86"];

/// Maps a lowercase letter to the character that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    map: BTreeMap<char, char>,
}

impl SubstitutionTable {
    /// Keys are stored lower-cased, so lookups through [`Self::lookup`]
    /// match either case of the input character.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let map = pairs
            .into_iter()
            .filter_map(|(key, value)| single_lowercase(key).map(|key| (key, value)))
            .collect();
        Self { map }
    }

    /// Returns the replacement for `c`, matched case-insensitively.
    pub fn lookup(&self, c: char) -> Option<char> {
        single_lowercase(c).and_then(|lower| self.map.get(&lower).copied())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SUBSTITUTIONS)
    }
}

// Characters whose lowercase form expands to several chars (e.g. 'İ') never match.
fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// Strings appended and prepended to candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    numbers: Vec<String>,
    years: Vec<String>,
}

impl Decorations {
    pub fn new<N, Y>(numbers: N, years: Y) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        Y: IntoIterator,
        Y::Item: Into<String>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
            years: years.into_iter().map(Into::into).collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            numbers: Vec::new(),
            years: Vec::new(),
        }
    }

    /// Numbers first, then years.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers
            .iter()
            .chain(self.years.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numbers.len() + self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Self::new(DEFAULT_NUMBERS, DEFAULT_YEARS)
    }
}

/// Everything the wordlist builder needs besides its input.
///
/// # Example
///
/// ```
/// use leetlist::{Rules, SubstitutionTable};
///
/// let rules = Rules::default()
///     .with_table(SubstitutionTable::from_pairs([('a', '@')]))
///     .with_max_substitutable(Some(12));
/// assert_eq!(rules.max_substitutable(), Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    table: SubstitutionTable,
    decorations: Decorations,
    max_substitutable: Option<usize>,
}

impl Rules {
    pub fn new(table: SubstitutionTable, decorations: Decorations) -> Self {
        Self {
            table,
            decorations,
            max_substitutable: None,
        }
    }

    pub fn with_table(mut self, table: SubstitutionTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    /// Caps the number of substitutable characters a single base word may
    /// carry. `None` leaves enumeration unbounded.
    pub fn with_max_substitutable(mut self, limit: Option<usize>) -> Self {
        self.max_substitutable = limit;
        self
    }

    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    pub fn max_substitutable(&self) -> Option<usize> {
        self.max_substitutable
    }
}
