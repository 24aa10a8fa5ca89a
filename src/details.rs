use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The personal details a wordlist is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Name,
    BirthYear,
    PetName,
    FavoriteWord,
    OtherDetail,
}

impl Label {
    pub const ALL: [Label; 5] = [
        Label::Name,
        Label::BirthYear,
        Label::PetName,
        Label::FavoriteWord,
        Label::OtherDetail,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Label::Name => "name",
            Label::BirthYear => "birth_year",
            Label::PetName => "pet_name",
            Label::FavoriteWord => "favorite_word",
            Label::OtherDetail => "other_detail",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Label::Name => "Full Name",
            Label::BirthYear => "Birth Year",
            Label::PetName => "Pet Name",
            Label::FavoriteWord => "Favorite Word",
            Label::OtherDetail => "Other Detail",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Labeled input values for one generation run. Unset labels and blank
/// values are both treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    fields: BTreeMap<Label, String>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, label: Label, value: impl Into<String>) {
        self.fields.insert(label, value.into());
    }

    pub fn with(mut self, label: Label, value: impl Into<String>) -> Self {
        self.set(label, value);
        self
    }

    /// The distinct trimmed, non-blank values. Case is kept as typed.
    pub fn raw_words(&self) -> BTreeSet<String> {
        self.fields
            .values()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(Label, Option<S>)> for InputRecord {
    fn from_iter<I: IntoIterator<Item = (Label, Option<S>)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v.into())))
            .collect();
        Self { fields }
    }
}
