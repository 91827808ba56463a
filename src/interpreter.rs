use crate::constants::{SENTINEL_PHRASE, SENTINEL_WORD};
use crate::errors::{CellFault, InterpretError, ResultTextError};

/// What the "Calculated Orbit Lifetime" field says.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifetimeText {
    Years(f64),
    /// Decay happens after the last propagated year.
    BeyondPropagation,
}

impl LifetimeText {
    /// Accepts the sentinel either as its first word alone (what a
    /// double-click on the field copies) or as the full phrase.
    pub fn parse(raw: &str) -> Result<Self, ResultTextError> {
        let text = raw.trim();
        if text == SENTINEL_WORD || text.starts_with(SENTINEL_PHRASE) {
            return Ok(LifetimeText::BeyondPropagation);
        }
        // The sentinel's leading letter without the word or phrase is a
        // different message, not a number.
        if text.starts_with(&SENTINEL_WORD[..1]) {
            return Err(ResultTextError::AmbiguousSentinel {
                raw: raw.to_string(),
            });
        }
        parse_finite(text)
            .map(LifetimeText::Years)
            .ok_or_else(|| ResultTextError::NotANumber {
                raw: raw.to_string(),
            })
    }
}

/// `f64::from_str` also accepts "NaN" and "inf", which are not lifetimes.
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Turns the copied lifetime text into years, reading the last propagated
/// year when DAS only reports "Greater than ...".
#[derive(Debug, Clone, Copy)]
pub struct ResultInterpreter {
    start_year: i32,
}

impl ResultInterpreter {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// `read_last_year` is only called for the sentinel text.
    pub fn interpret<F>(&self, raw: &str, read_last_year: F) -> Result<f64, InterpretError>
    where
        F: FnOnce() -> Result<String, CellFault>,
    {
        match LifetimeText::parse(raw)? {
            LifetimeText::Years(years) => Ok(years),
            LifetimeText::BeyondPropagation => {
                let raw_year = read_last_year()?;
                let last_year = parse_finite(raw_year.trim()).ok_or_else(|| {
                    ResultTextError::LastYearNotANumber {
                        raw: raw_year.clone(),
                    }
                })?;
                Ok(last_year - f64::from(self.start_year))
            }
        }
    }
}
