use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT: &str = "custom_wordlist.txt";

/// Writes one word per line, each newline-terminated.
pub fn write_wordlist<W: Write>(writer: W, words: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Creates or truncates `path` and writes the wordlist into it.
pub fn save_wordlist(path: &Path, words: &[String]) -> io::Result<()> {
    let file = File::create(path)?;
    write_wordlist(file, words)
}
