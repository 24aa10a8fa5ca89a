mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use leetlist::output::{save_wordlist, write_wordlist, DEFAULT_OUTPUT};
use leetlist::{
    BuildStats, InputRecord, Label, Rules, Scorer, WordlistBuilder, WordlistError, ZxcvbnScorer,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_MAX_SUBSTITUTIONS: usize = 20;

const EMPTY_INPUT_MESSAGE: &str = "Please provide at least one detail for wordlist generation.";

#[derive(Parser)]
#[command(
    name = "leetlist",
    version,
    about = "Password strength analyzer with a personal-detail wordlist generator"
)]
struct Cli {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    birth_year: Option<String>,

    #[arg(long)]
    pet_name: Option<String>,

    #[arg(long)]
    favorite_word: Option<String>,

    #[arg(long)]
    other_detail: Option<String>,

    /// Destination file, or "-" for standard output
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Reject any word with more substitutable characters than this
    #[arg(long, default_value_t = DEFAULT_MAX_SUBSTITUTIONS)]
    max_substitutions: usize,

    /// Do not prompt for a password to score
    #[arg(long)]
    skip_strength: bool,

    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn details(&self) -> [(Label, Option<&String>); 5] {
        [
            (Label::Name, self.name.as_ref()),
            (Label::BirthYear, self.birth_year.as_ref()),
            (Label::PetName, self.pet_name.as_ref()),
            (Label::FavoriteWord, self.favorite_word.as_ref()),
            (Label::OtherDetail, self.other_detail.as_ref()),
        ]
    }

    fn destination(&self) -> Destination {
        Destination::from_path(&self.output)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Destination::Stdout
        } else {
            Destination::File(path.to_path_buf())
        }
    }

    fn describe(&self) -> String {
        match self {
            Destination::Stdout => "standard output".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

fn input_record(cli: &Cli) -> Result<InputRecord> {
    let details = cli.details();
    if details.iter().all(|(_, value)| value.is_none()) {
        if cli.destination() == Destination::Stdout {
            anyhow::bail!("Details must be passed as arguments when writing to standard output");
        }
        return ui::prompt_details();
    }

    let normalized = details
        .into_iter()
        .map(|(label, value)| -> Result<(Label, Option<String>)> {
            let value = value.map(|v| ui::normalize_detail(v, label)).transpose()?;
            Ok((label, value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(normalized.into_iter().collect())
}

/// Builds the wordlist and hands it to the destination. Nothing is written
/// when the build fails.
fn generate_and_write<W: Write>(
    builder: &WordlistBuilder,
    record: &InputRecord,
    destination: &Destination,
    stdout: W,
) -> Result<(Vec<String>, BuildStats)> {
    let (words, stats) = builder.build_with_stats(record).map_err(|e| match e {
        WordlistError::EmptyInput => anyhow::Error::new(e).context(EMPTY_INPUT_MESSAGE),
        other => anyhow::Error::new(other).context("Wordlist generation aborted"),
    })?;

    match destination {
        Destination::Stdout => {
            write_wordlist(stdout, &words).context("Failed to write wordlist to stdout")?;
        }
        Destination::File(path) => {
            save_wordlist(path, &words)
                .with_context(|| format!("Failed to save wordlist to {}", path.display()))?;
        }
    }

    info!(
        destination = %destination.describe(),
        words = words.len(),
        "wordlist written"
    );
    Ok((words, stats))
}

fn main() -> Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }

    let cli = Cli::parse();
    let destination = cli.destination();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let record = input_record(&cli)?;

    if !cli.skip_strength && destination != Destination::Stdout {
        if let Some(password) = ui::prompt_password()? {
            let scorer = ZxcvbnScorer::with_user_inputs(record.raw_words());
            let report = scorer.score(&password);
            ui::display_strength(&report, &options);
        }
    }

    let rules = Rules::default().with_max_substitutable(Some(cli.max_substitutions));
    let builder = WordlistBuilder::new(rules);

    let ((words, stats), elapsed) =
        ui::show_progress(options.unicode_support, "Generating wordlist...", || {
            generate_and_write(&builder, &record, &destination, io::stdout().lock())
        })?;

    if destination == Destination::Stdout {
        return Ok(());
    }

    let summary = ui::RunSummary {
        raw_words: stats.raw_words,
        pairs: stats.pairs,
        candidates: words.len(),
        destination: destination.describe(),
    };
    ui::display_summary(&summary, builder.rules(), elapsed, &options);

    Ok(())
}
