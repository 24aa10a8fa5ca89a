pub mod builder;
pub mod details;
pub mod output;
pub mod rules;
pub mod strength;
pub mod variants;

pub use builder::{build_wordlist, BuildStats, WordlistBuilder, WordlistError};
pub use details::{InputRecord, Label};
pub use rules::{Decorations, Rules, SubstitutionTable};
pub use strength::{Scorer, StrengthReport, ZxcvbnScorer};
pub use variants::{generate_variants, substitutable_count};
