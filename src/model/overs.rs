//! Over arithmetic.
//!
//! Overs are counted internally as legal balls and converted to cricket notation only at the
//! API boundary, where `12.3` means twelve completed overs and three balls of the thirteenth.

use std::fmt;

use thiserror::Error;

/// Legal deliveries in one over.
pub const BALLS_PER_OVER: i32 = 6;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid overs value {0}: expected completed overs and 0-5 balls, e.g. 12.3")]
pub struct InvalidOvers(pub f64);

/// A count of legal balls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Overs(i32);

impl Overs {
    pub fn from_balls(balls: i32) -> Self {
        Self(balls.max(0))
    }

    /// Parses cricket notation such as `12.3`.
    ///
    /// # Returns
    /// - `Ok(Overs)` - Whole overs and a ball digit between 0 and 5
    /// - `Err(InvalidOvers)` - Negative, non-finite, more than one decimal digit or a ball digit above 5
    pub fn from_notation(value: f64) -> Result<Self, InvalidOvers> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidOvers(value));
        }

        let tenths = (value * 10.0).round();
        if (tenths - value * 10.0).abs() > 1e-6 {
            return Err(InvalidOvers(value));
        }

        let tenths = tenths as i64;
        let (overs, balls) = (tenths / 10, tenths % 10);
        if balls >= BALLS_PER_OVER as i64 {
            return Err(InvalidOvers(value));
        }

        let total = overs * BALLS_PER_OVER as i64 + balls;
        i32::try_from(total)
            .map(Self)
            .map_err(|_| InvalidOvers(value))
    }

    pub fn balls(&self) -> i32 {
        self.0
    }

    pub fn completed(&self) -> i32 {
        self.0 / BALLS_PER_OVER
    }

    pub fn remainder(&self) -> i32 {
        self.0 % BALLS_PER_OVER
    }

    /// Cricket notation, `12.3` for 75 balls.
    pub fn as_notation(&self) -> f64 {
        self.completed() as f64 + self.remainder() as f64 / 10.0
    }

    /// True fractional overs, `12.5` for 75 balls.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / BALLS_PER_OVER as f64
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed(), self.remainder())
    }
}

/// Rounds a derived rate to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs per hundred balls faced, 0 when no balls were faced.
pub fn strike_rate(runs: i32, balls: i32) -> f64 {
    if balls <= 0 {
        return 0.0;
    }

    round2(runs as f64 * 100.0 / balls as f64)
}

/// Runs conceded per over, 0 when no legal balls were bowled.
pub fn economy(runs: i32, legal_balls: i32) -> f64 {
    if legal_balls <= 0 {
        return 0.0;
    }

    round2(runs as f64 * BALLS_PER_OVER as f64 / legal_balls as f64)
}
