//! Stock level classification.
//!
//! Quantities are bucketed into a closed set of levels, and each level maps
//! to a fixed dictionary key. Callers resolve the key through the dictionary
//! instead of concatenating strings into key names at runtime.

use std::fmt;

// ============================================================
// StockLevel
// ============================================================

/// Inventory level for an article, derived from its remaining quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// At most one unit left.
    Critical,
    /// Fewer than five units left.
    Low,
    /// Enough stock; no label is shown.
    None,
}

impl StockLevel {
    /// Classify a quantity into a level.
    ///
    /// The critical band is checked first so it is not shadowed by the
    /// wider low band.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi::status::StockLevel;
    ///
    /// assert_eq!(StockLevel::classify(1).as_key(), "critical");
    /// assert_eq!(StockLevel::classify(3).as_key(), "low");
    /// assert_eq!(StockLevel::classify(20).as_key(), "none");
    /// ```
    pub fn classify(quantity: u32) -> Self {
        if quantity <= 1 {
            StockLevel::Critical
        } else if quantity < 5 {
            StockLevel::Low
        } else {
            StockLevel::None
        }
    }

    /// The dictionary key for this level's label.
    pub fn as_key(&self) -> &'static str {
        match self {
            StockLevel::Critical => "critical",
            StockLevel::Low => "low",
            StockLevel::None => "none",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ============================================================
// Tests
// ============================================================
