use crate::details::InputRecord;
use crate::rules::Rules;
use crate::variants::{generate_variants, substitutable_count};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordlistError {
    #[error("no usable input detail provided")]
    EmptyInput,

    #[error("\"{word}\" has {count} substitutable characters (maximum is {limit})")]
    TooManySubstitutions {
        word: String,
        count: usize,
        limit: usize,
    },
}

/// Input and pair counts of one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub raw_words: usize,
    pub pairs: usize,
}

/// Builds candidate wordlists from an [`InputRecord`] under a fixed set of
/// [`Rules`].
#[derive(Debug, Clone, Default)]
pub struct WordlistBuilder {
    rules: Rules,
}

impl WordlistBuilder {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the sorted, deduplicated wordlist.
    ///
    /// Single words get every leet variant decorated on both sides. Pairwise
    /// concatenations get their leet variants, but only the plain
    /// concatenation is decorated.
    pub fn build(&self, input: &InputRecord) -> Result<Vec<String>, WordlistError> {
        self.build_with_stats(input).map(|(words, _)| words)
    }

    pub fn build_with_stats(
        &self,
        input: &InputRecord,
    ) -> Result<(Vec<String>, BuildStats), WordlistError> {
        let raw_words: Vec<String> = input.raw_words().into_iter().collect();
        if raw_words.is_empty() {
            return Err(WordlistError::EmptyInput);
        }

        let mut wordlist = HashSet::new();

        for word in &raw_words {
            for variant in self.variants_of(word)? {
                self.decorate(&variant, &mut wordlist);
                wordlist.insert(variant);
            }
        }

        let mut pairs = 0usize;
        for (i, first) in raw_words.iter().enumerate() {
            for second in raw_words.iter().skip(i + 1) {
                pairs += 1;
                for base in [format!("{first}{second}"), format!("{second}{first}")] {
                    wordlist.extend(self.variants_of(&base)?);
                    self.decorate(&base, &mut wordlist);
                    wordlist.insert(base);
                }
            }
        }

        debug!(
            raw_words = raw_words.len(),
            pairs,
            candidates = wordlist.len(),
            "wordlist assembled"
        );

        let stats = BuildStats {
            raw_words: raw_words.len(),
            pairs,
        };

        let mut sorted: Vec<String> = wordlist.into_iter().collect();
        sorted.sort_unstable();
        Ok((sorted, stats))
    }

    fn variants_of(&self, word: &str) -> Result<HashSet<String>, WordlistError> {
        let table = self.rules.table();
        if let Some(limit) = self.rules.max_substitutable() {
            let count = substitutable_count(word, table);
            if count > limit {
                return Err(WordlistError::TooManySubstitutions {
                    word: word.to_string(),
                    count,
                    limit,
                });
            }
        }
        Ok(generate_variants(word, table))
    }

    fn decorate(&self, word: &str, wordlist: &mut HashSet<String>) {
        for decoration in self.rules.decorations().iter() {
            wordlist.insert(format!("{word}{decoration}"));
            wordlist.insert(format!("{decoration}{word}"));
        }
    }
}

/// Builds a wordlist with the default substitution table and decorations.
pub fn build_wordlist(input: &InputRecord) -> Result<Vec<String>, WordlistError> {
    WordlistBuilder::default().build(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::Label;
    use crate::rules::{Decorations, SubstitutionTable};

    fn al_bo() -> InputRecord {
        InputRecord::new()
            .with(Label::Name, "Al")
            .with(Label::PetName, "Bo")
    }

    fn contains(words: &[String], word: &str) -> bool {
        words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    #[test]
    fn test_empty_input() {
        let input = InputRecord::new()
            .with(Label::Name, "")
            .with(Label::BirthYear, "   ")
            .with(Label::PetName, "\t");

        assert_eq!(build_wordlist(&input), Err(WordlistError::EmptyInput));
        assert_eq!(
            build_wordlist(&InputRecord::new()),
            Err(WordlistError::EmptyInput)
        );
    }

    #[test]
    fn test_sorted_and_unique() {
        let input = InputRecord::new()
            .with(Label::Name, "Sam")
            .with(Label::BirthYear, "1990")
            .with(Label::PetName, "Toto");

        let words = build_wordlist(&input).unwrap();
        assert!(!words.is_empty());
        assert!(
            words.windows(2).all(|pair| pair[0] < pair[1]),
            "Wordlist is not strictly ascending"
        );
    }

    #[test]
    fn test_single_word_exact() {
        let input = InputRecord::new().with(Label::Name, "Cat");
        let words = build_wordlist(&input).unwrap();

        // 4 variants, each plain plus 6 decorations on both sides
        assert_eq!(words.len(), 4 * (1 + 2 * 6));

        for variant in ["Cat", "C4t", "Ca7", "C47"] {
            assert!(contains(&words, variant));
            for decoration in Decorations::default().iter() {
                assert!(contains(&words, &format!("{variant}{decoration}")));
                assert!(contains(&words, &format!("{decoration}{variant}")));
            }
        }
    }

    #[test]
    fn test_pairwise_concatenations() {
        let words = build_wordlist(&al_bo()).unwrap();

        assert!(contains(&words, "AlBo"));
        assert!(contains(&words, "BoAl"));
        for decoration in Decorations::default().iter() {
            assert!(contains(&words, &format!("AlBo{decoration}")));
            assert!(contains(&words, &format!("{decoration}AlBo")));
            assert!(contains(&words, &format!("BoAl{decoration}")));
            assert!(contains(&words, &format!("{decoration}BoAl")));
        }
    }

    #[test]
    fn test_pairwise_variants_not_decorated() {
        let words = build_wordlist(&al_bo()).unwrap();

        assert!(contains(&words, "4lBo"));
        assert!(contains(&words, "4lB0"));
        assert!(contains(&words, "AlBo2024"));
        assert!(!contains(&words, "4lB02024"));
        assert!(!contains(&words, "2024B04l"));
    }

    #[test]
    fn test_pairwise_exact_count() {
        let words = build_wordlist(&al_bo()).unwrap();

        // "Al" and "Bo": 2 variants each, 13 forms per variant.
        // "AlBo" and "BoAl": 4 variants each plus 12 decorated bases.
        // Single-word forms and pairwise forms never collide here.
        let singles = 2 * 2 * 13;
        let pairs = 2 * (4 + 12);
        assert_eq!(words.len(), singles + pairs);
    }

    #[test]
    fn test_superset_of_variants() {
        let input = InputRecord::new()
            .with(Label::Name, "Tess")
            .with(Label::FavoriteWord, "ocean")
            .with(Label::OtherDetail, "42");
        let words = build_wordlist(&input).unwrap();
        let table = SubstitutionTable::default();

        for raw in input.raw_words() {
            for variant in generate_variants(&raw, &table) {
                assert!(contains(&words, &variant), "Missing variant {}", variant);
            }
        }
        for base in ["Tessocean", "oceanTess", "Tess42", "42Tess", "ocean42", "42ocean"] {
            assert!(contains(&words, base), "Missing concatenation {}", base);
            for variant in generate_variants(base, &table) {
                assert!(contains(&words, &variant), "Missing variant {}", variant);
            }
        }
    }

    #[test]
    fn test_duplicate_inputs_collapse() {
        let once = InputRecord::new().with(Label::Name, "Max");
        let twice = InputRecord::new()
            .with(Label::Name, "Max")
            .with(Label::PetName, " Max ");

        assert_eq!(build_wordlist(&once), build_wordlist(&twice));
        assert!(!build_wordlist(&twice).unwrap().contains(&"MaxMax".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let input = InputRecord::new()
            .with(Label::Name, "Jane Doe")
            .with(Label::BirthYear, "1987")
            .with(Label::PetName, "Biscuit");

        assert_eq!(build_wordlist(&input), build_wordlist(&input));
    }

    #[test]
    fn test_injected_rules() {
        let rules = Rules::new(
            SubstitutionTable::from_pairs([('o', '0')]),
            Decorations::new(["!"], Vec::<String>::new()),
        );
        let input = InputRecord::new().with(Label::Name, "Bo");
        let words = WordlistBuilder::new(rules).build(&input).unwrap();

        assert_eq!(words, vec!["!B0", "!Bo", "B0", "B0!", "Bo", "Bo!"]);
    }

    #[test]
    fn test_no_decorations() {
        let rules = Rules::default().with_decorations(Decorations::none());
        let words = WordlistBuilder::new(rules).build(&al_bo()).unwrap();

        assert_eq!(
            words,
            vec![
                "4l", "4lB0", "4lBo", "Al", "AlB0", "AlBo", "B0", "B04l", "B0Al", "Bo", "Bo4l",
                "BoAl",
            ]
        );
    }

    #[test]
    fn test_substitution_limit_on_single_word() {
        let rules = Rules::default().with_max_substitutable(Some(2));
        let input = InputRecord::new().with(Label::FavoriteWord, "toast");

        assert_eq!(
            WordlistBuilder::new(rules).build(&input),
            Err(WordlistError::TooManySubstitutions {
                word: "toast".to_string(),
                count: 5,
                limit: 2,
            })
        );
    }

    #[test]
    fn test_substitution_limit_on_concatenation() {
        let rules = Rules::default().with_max_substitutable(Some(3));
        let input = InputRecord::new()
            .with(Label::Name, "Cat")
            .with(Label::PetName, "Tom");

        let err = WordlistBuilder::new(rules).build(&input).unwrap_err();
        assert!(matches!(
            err,
            WordlistError::TooManySubstitutions { count: 4, limit: 3, .. }
        ));
    }

    #[test]
    fn test_substitution_limit_not_reached() {
        let rules = Rules::default().with_max_substitutable(Some(4));
        let input = InputRecord::new()
            .with(Label::Name, "Cat")
            .with(Label::PetName, "Tom");

        assert_eq!(
            WordlistBuilder::new(rules).build(&input),
            build_wordlist(&input)
        );
    }

    #[test]
    fn test_build_stats() {
        let input = InputRecord::new()
            .with(Label::Name, "Sam")
            .with(Label::BirthYear, "1990")
            .with(Label::PetName, "Toto")
            .with(Label::OtherDetail, " Sam ");

        let (words, stats) = WordlistBuilder::default().build_with_stats(&input).unwrap();
        assert_eq!(stats, BuildStats { raw_words: 3, pairs: 3 });
        assert_eq!(Ok(words), build_wordlist(&input));
    }

    #[test]
    fn test_build_stats_single_word() {
        let input = InputRecord::new().with(Label::Name, "Cat");
        let (_, stats) = WordlistBuilder::default().build_with_stats(&input).unwrap();
        assert_eq!(stats, BuildStats { raw_words: 1, pairs: 0 });
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WordlistError::EmptyInput.to_string(),
            "no usable input detail provided"
        );
        let err = WordlistError::TooManySubstitutions {
            word: "toast".to_string(),
            count: 4,
            limit: 2,
        };
        assert_eq!(
            err.to_string(),
            "\"toast\" has 4 substitutable characters (maximum is 2)"
        );
    }
}
