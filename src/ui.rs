use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use leetlist::strength::MAX_SCORE;
use leetlist::{InputRecord, Label, Rules, StrengthReport};
use rpassword::read_password;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MIN_SAFE_SCORE: u8 = 3;

pub const MAX_DETAIL_BYTES: usize = 1024;

pub struct RunSummary {
    pub raw_words: usize,
    pub pairs: usize,
    pub candidates: usize,
    pub destination: String,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score.min(MAX_SCORE) {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Strong",
        _ => "Very strong",
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<String> {
    let control_chars: Vec<(usize, char)> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        let warning_msg = format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|(pos, _)| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        term.write_line(&warning_msg)?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            anyhow::bail!("Aborted");
        }
    }

    Ok(s.to_string())
}

fn normalize_and_validate(s: &str, input_name: &str) -> Result<String> {
    let trimmed = s.trim();
    let normalized: String = trimmed.nfc().collect();
    validate_control_characters(&normalized, input_name)
}

/// Normalizes a detail passed on the command line.
pub fn normalize_detail(value: &str, label: Label) -> Result<String> {
    let normalized = normalize_and_validate(value, label.prompt())?;
    if normalized.len() > MAX_DETAIL_BYTES {
        anyhow::bail!(
            "{} too long ({} bytes, maximum is {})",
            label.prompt(),
            normalized.len(),
            MAX_DETAIL_BYTES
        );
    }
    Ok(normalized)
}

pub fn prompt_details() -> Result<InputRecord> {
    let mut record = InputRecord::new();

    for label in Label::ALL {
        print!("Enter {}: ", label.prompt());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .with_context(|| format!("Failed to read {}", label.prompt()))?;

        record.set(label, normalize_detail(&input, label)?);
    }

    Ok(record)
}

/// Reads the password to score without echoing it. An empty entry skips
/// the strength check.
pub fn prompt_password() -> Result<Option<Zeroizing<String>>> {
    print!("Enter Password for strength analysis (blank to skip): ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);
    if password.is_empty() {
        return Ok(None);
    }

    Ok(Some(password))
}

// Stdout may carry the wordlist itself, so progress output stays on stderr.
fn progress_term() -> Term {
    Term::stderr()
}

pub fn show_progress<F, T>(unicode_support: bool, message: &'static str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = progress_term();
    term.hide_cursor().ok();

    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::term(term.clone(), 20));

    if unicode_support {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠋"]),
        );
    } else {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("-\\|/-"),
        );
    }

    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

pub fn display_strength(report: &StrengthReport, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let secure = report.score >= MIN_SAFE_SCORE;
    let style = status_style(secure, options);
    let status = if secure { check_ok } else { check_warn };

    println!(
        "\n{} Password Score (0-{}): {} ({})",
        style.apply_to(format!("[{}]", status)),
        MAX_SCORE,
        style.apply_to(report.score),
        style.apply_to(score_label(report.score))
    );
    println!("Estimated Time to Crack: {}", report.crack_time);

    if let Some(warning) = &report.warning {
        println!("Warning: {}", warning);
    }

    if !options.quiet && !report.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
}

pub fn display_summary(summary: &RunSummary, rules: &Rules, elapsed: Duration, options: &DisplayOptions) {
    if options.quiet {
        println!(
            "Wordlist saved as '{}' ({} {})",
            summary.destination,
            summary.candidates,
            plural(summary.candidates, "word", "words")
        );
        return;
    }

    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let multiple = summary.raw_words >= 2;
    let inputs_style = status_style(multiple, options);
    let inputs_status = if multiple { check_ok } else { check_warn };

    let limit = match rules.max_substitutable() {
        Some(limit) => format!("{} per word", limit),
        None => "unbounded".to_string(),
    };

    let substitutions: Vec<String> = rules
        .table()
        .iter()
        .map(|(from, to)| format!("{}→{}", from, to))
        .collect();

    println!("\nSettings:");
    println!(
        "  ├─ Leet       {} {}",
        rules.table().len(),
        plural(rules.table().len(), "rule", "rules")
    );
    println!("  │  └─ {}", substitutions.join(" "));
    println!(
        "  ├─ Affixes    {} {}",
        rules.decorations().len(),
        plural(rules.decorations().len(), "decoration", "decorations")
    );
    println!("  └─ Limit      {}", limit);

    println!("\nStats:");
    println!(
        "  ├─ Inputs     {} {} {}",
        inputs_style.apply_to(format!("[{}]", inputs_status)),
        inputs_style.apply_to(summary.raw_words),
        plural(summary.raw_words, "word", "words")
    );
    println!(
        "  ├─ Pairs      {} {}",
        summary.pairs,
        plural(summary.pairs, "pair", "pairs")
    );
    println!(
        "  ├─ Wordlist   {} {}",
        summary.candidates,
        plural(summary.candidates, "word", "words")
    );
    println!("  └─ Time       {:.1}s", elapsed.as_secs_f64());

    println!(
        "\n{} Wordlist generated and saved as '{}'",
        status_style(true, options).apply_to(format!("[{}]", check_ok)),
        summary.destination
    );
}
