//! Enumeration engine - streams every word of every configured length
//!
//! For each length the engine drives an [`Odometer`] over indices into the
//! alphabet and writes one decorated line per counter state. Nothing but the
//! current counter and a single line buffer is held in memory.

mod odometer;
mod words;

pub use odometer::Odometer;
pub use words::Words;

use std::io::Write;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::error::{Result, WordgenError};
use crate::types::{GenerationConfig, LengthRange};

/// Progress bar updates are batched to keep the hot loop cheap
const PROGRESS_BATCH: u64 = 4096;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumerationSummary {
    /// Number of lengths fully enumerated
    pub lengths: u32,
    /// Number of lines written
    pub words: u64,
}

/// Total number of lines a run produces: sum of `n^t` over the range.
///
/// Returns `None` when the count does not fit in a `u128`.
pub fn total_words(alphabet_len: usize, lengths: LengthRange) -> Option<u128> {
    let n = alphabet_len as u128;
    lengths
        .lengths()
        .try_fold(0u128, |acc, t| acc.checked_add(n.checked_pow(t)?))
}

/// Write every word described by `config` to `sink`
pub fn enumerate<W: Write + ?Sized>(config: &GenerationConfig, sink: &mut W) -> Result<EnumerationSummary> {
    Engine::new(config).run(sink)
}

/// Word list engine bound to one configuration
pub struct Engine<'a> {
    config: &'a GenerationConfig,
    progress: Option<ProgressBar>,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Report written lines on `progress`; output is unaffected
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Enumerate all lengths in increasing order, stopping at the first
    /// failed write.
    pub fn run<W: Write + ?Sized>(&self, sink: &mut W) -> Result<EnumerationSummary> {
        let mut summary = EnumerationSummary::default();

        if self.config.alphabet.is_empty() {
            tracing::info!("Empty alphabet, nothing to generate");
            return Ok(summary);
        }

        let start = Instant::now();
        tracing::info!(
            alphabet_len = self.config.alphabet.len(),
            lengths = %self.config.lengths,
            "Starting enumeration"
        );

        // Sized for the longest line so the buffer never reallocates.
        let mut line = String::new();
        let max_symbol_len = self
            .config
            .alphabet
            .symbols()
            .iter()
            .map(|c| c.len_utf8())
            .max()
            .unwrap_or(1);
        line.try_reserve(
            self.config.decoration.overhead() + self.config.lengths.max() as usize * max_symbol_len + 1,
        )?;

        for length in self.config.lengths.lengths() {
            let written = self.run_length(length as usize, &mut line, sink)?;
            summary.lengths += 1;
            summary.words += written;
            tracing::debug!(length, words = written, "Length completed");
        }

        sink.flush().map_err(|e| WordgenError::sink(&e))?;

        tracing::info!(
            words = summary.words,
            duration_ms = %start.elapsed().as_millis(),
            "Enumeration completed"
        );

        Ok(summary)
    }

    /// One pass over all `n^length` tuples
    fn run_length<W: Write + ?Sized>(&self, length: usize, line: &mut String, sink: &mut W) -> Result<u64> {
        let mut odometer = Odometer::new(length, self.config.alphabet.len())?;
        let mut written = 0u64;

        loop {
            line.clear();
            words::render_word(self.config, odometer.digits(), line);
            line.push('\n');

            if let Err(e) = sink.write_all(line.as_bytes()) {
                tracing::debug!(length, written, error = %e, "Sink rejected write");
                return Err(WordgenError::sink(&e));
            }
            written += 1;

            if written % PROGRESS_BATCH == 0 {
                if let Some(pb) = &self.progress {
                    pb.inc(PROGRESS_BATCH);
                }
            }

            if !odometer.advance() {
                break;
            }
        }

        if let Some(pb) = &self.progress {
            pb.inc(written % PROGRESS_BATCH);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use std::collections::HashSet;
    use std::io;

    fn config(alphabet: &str, min: u32, max: u32) -> GenerationConfig {
        GenerationConfig::new(Alphabet::from(alphabet), LengthRange::new(min, max).unwrap())
    }

    fn run_to_string(config: &GenerationConfig) -> String {
        let mut out = Vec::new();
        enumerate(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_order_regression() {
        assert_eq!(run_to_string(&config("ab", 2, 2)), "aa\nba\nab\nbb\n");
    }

    #[test]
    fn test_range_aggregation() {
        let cfg = config("ab", 1, 2);
        let mut out = Vec::new();
        let summary = enumerate(&cfg, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\naa\nba\nab\nbb\n");
        assert_eq!(summary, EnumerationSummary { lengths: 2, words: 6 });
    }

    #[test]
    fn test_completeness() {
        let cfg = config("abc", 4, 4);
        let out = run_to_string(&cfg);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 81);
        let unique: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(unique.len(), 81);
        assert!(lines.iter().all(|w| w.len() == 4 && w.chars().all(|c| "abc".contains(c))));
    }

    #[test]
    fn test_empty_alphabet_writes_nothing() {
        let cfg = config("", 1, 8);
        let mut out = Vec::new();
        let summary = enumerate(&cfg, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary, EnumerationSummary::default());
    }

    #[test]
    fn test_decoration() {
        let cfg = config("xy", 1, 1).with_prefix("[").with_suffix("]");
        assert_eq!(run_to_string(&cfg), "[x]\n[y]\n");
    }

    #[test]
    fn test_duplicate_symbols_not_deduplicated() {
        assert_eq!(run_to_string(&config("aa", 1, 1)), "a\na\n");
    }

    #[test]
    fn test_idempotent() {
        let cfg = config("0123", 1, 3).with_suffix("!");
        assert_eq!(run_to_string(&cfg), run_to_string(&cfg));
    }

    #[test]
    fn test_matches_words_iterator() {
        let cfg = config("xyz", 1, 3).with_prefix("p-");
        let expected: String = Words::new(&cfg).map(|w| w + "\n").collect();
        assert_eq!(run_to_string(&cfg), expected);
    }

    #[test]
    fn test_total_words() {
        assert_eq!(total_words(2, LengthRange::new(1, 2).unwrap()), Some(6));
        assert_eq!(total_words(10, LengthRange::single(3).unwrap()), Some(1000));
        assert_eq!(total_words(0, LengthRange::new(1, 5).unwrap()), Some(0));
        assert_eq!(total_words(94, LengthRange::new(1, 40).unwrap()), None);
    }

    /// Accepts `limit` writes, then fails
    struct FailingSink {
        limit: usize,
        accepted: Vec<u8>,
        writes: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"));
            }
            self.writes += 1;
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_stops_engine() {
        let cfg = config("ab", 3, 3);
        let mut sink = FailingSink { limit: 3, accepted: Vec::new(), writes: 0 };
        let err = enumerate(&cfg, &mut sink).unwrap_err();
        assert!(err.is_broken_pipe());
        assert_eq!(sink.writes, 3);
        assert_eq!(String::from_utf8(sink.accepted).unwrap(), "aaa\nbaa\naba\n");
    }

    /// Accepts every write, fails on flush
    struct UnflushableSink {
        accepted: Vec<u8>,
    }

    impl Write for UnflushableSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let cfg = config("ab", 1, 1);
        let mut sink = UnflushableSink { accepted: Vec::new() };
        let err = enumerate(&cfg, &mut sink).unwrap_err();
        assert!(matches!(err, WordgenError::Sink { .. }));
        assert!(!err.is_broken_pipe());
        assert_eq!(sink.accepted, b"a\nb\n");
    }

    #[test]
    fn test_progress_counts_all_lines() {
        let cfg = config("0123456789", 4, 4);
        let pb = ProgressBar::hidden();
        let mut out = io::sink();
        Engine::new(&cfg).with_progress(pb.clone()).run(&mut out).unwrap();
        assert_eq!(pb.position(), 10_000);
    }
}
