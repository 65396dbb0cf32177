use crate::crypto::{modulo_index, OsRandom, RandomSource};
use crate::generators::{PasswordScheme, Result};
use crate::models::{PinOptions, StrengthAssessment, StrengthDetails};

/// Numeric PINs, one modulo-10 digit per raw draw.
pub struct PinGenerator<R = OsRandom> {
    source: R,
}

impl PinGenerator<OsRandom> {
    pub fn new() -> Self {
        PinGenerator { source: OsRandom }
    }
}

impl Default for PinGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PinGenerator<R> {
    pub fn with_source(source: R) -> Self {
        PinGenerator { source }
    }

    pub fn generate_pin(&mut self, length: usize) -> Result<String> {
        let mut pin = String::with_capacity(length);
        for _ in 0..length {
            let digit = modulo_index(&mut self.source, 10)?;
            pin.push(char::from(b'0' + digit as u8));
        }
        Ok(pin)
    }
}

impl<R: RandomSource> PasswordScheme for PinGenerator<R> {
    type Options = PinOptions;

    fn generate(&mut self, options: &PinOptions) -> Result<String> {
        self.generate_pin(options.length)
    }

    fn assess_strength(&self, pin: &str) -> StrengthAssessment {
        assess_pin_strength(pin.chars().count())
    }
}

pub fn assess_pin_strength(length: usize) -> StrengthAssessment {
    if length == 0 {
        return StrengthAssessment::new(0, 0.0, StrengthDetails::Pin { length });
    }

    let entropy = length as f64 * 10f64.log2();
    let score = match entropy {
        e if e >= 50.0 => 5,
        e if e >= 40.0 => 4,
        e if e >= 30.0 => 3,
        e if e >= 20.0 => 2,
        _ => 1,
    };

    StrengthAssessment::new(score, entropy, StrengthDetails::Pin { length })
}
