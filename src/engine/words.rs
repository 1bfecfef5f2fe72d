//! Lazy iterator over decorated words

use super::odometer::Odometer;
use crate::types::GenerationConfig;

/// Yields every decorated word of every length in the configured range,
/// in engine order, without the line terminator.
///
/// Allocation failures for the counter end the iteration early; use
/// [`Engine`](super::Engine) when that has to be reported.
pub struct Words<'a> {
    config: &'a GenerationConfig,
    next_length: u32,
    odometer: Option<Odometer>,
}

impl<'a> Words<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            next_length: config.lengths.min(),
            odometer: None,
        }
    }

    fn start_next_length(&mut self) -> Option<()> {
        if self.config.alphabet.is_empty() || self.next_length > self.config.lengths.max() {
            return None;
        }
        let odometer = Odometer::new(self.next_length as usize, self.config.alphabet.len()).ok()?;
        self.next_length += 1;
        self.odometer = Some(odometer);
        Some(())
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.odometer.as_mut() {
                Some(odometer) if !odometer.is_exhausted() => {
                    let mut word = String::new();
                    render_word(self.config, odometer.digits(), &mut word);
                    odometer.advance();
                    return Some(word);
                }
                _ => self.start_next_length()?,
            }
        }
    }
}

/// Append `prefix + symbols + suffix` for `digits` to `buf`
pub(crate) fn render_word(config: &GenerationConfig, digits: &[usize], buf: &mut String) {
    let symbols = config.alphabet.symbols();
    buf.push_str(config.decoration.prefix());
    buf.extend(digits.iter().map(|&d| symbols[d]));
    buf.push_str(config.decoration.suffix());
}
