//! Feedback masks and the guess/answer comparison
//!
//! A mask holds one [`LetterOutcome`] per letter position. Its integer key uses
//! base-3 encoding:
//! - 0 = Grey (letter not in word, after duplicate accounting)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! Each position contributes digit × 3^position, so keys range over `0..MASK_COUNT`.

use super::word::{WORD_SIZE, Word};
use std::fmt;
use std::str::FromStr;

/// Number of distinct masks (3^WORD_SIZE)
pub const MASK_COUNT: usize = 3usize.pow(WORD_SIZE as u32);

/// Outcome reported for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LetterOutcome {
    #[default]
    Grey = 0,
    Yellow = 1,
    Green = 2,
}

impl LetterOutcome {
    /// All outcomes in key-digit order
    pub const ALL: [Self; 3] = [Self::Grey, Self::Yellow, Self::Green];

    /// Base-3 digit used by the mask key
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u16 {
        self as u16
    }

    /// Outcome for a base-3 digit
    #[must_use]
    pub const fn from_digit(digit: u16) -> Option<Self> {
        match digit {
            0 => Some(Self::Grey),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            _ => None,
        }
    }

    /// Parse a single symbol of a compact mask string
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'x'/⬛/⬜ (grey).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'x' | 'X' | '⬛' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }

    /// Emoji square for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Grey => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

impl FromStr for LetterOutcome {
    type Err = MaskParseError;

    /// Parse a per-letter answer such as "green", "Yellow", "grey"/"gray" or a single symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "grey" | "gray" => Ok(Self::Grey),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => {
                        Self::from_symbol(symbol).ok_or(MaskParseError::InvalidSymbol(symbol))
                    }
                    _ => Err(MaskParseError::UnknownToken(s.trim().to_string())),
                }
            }
        }
    }
}

impl fmt::Display for LetterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grey => "grey",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// Error type for unparseable feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskParseError {
    InvalidLength(usize),
    InvalidSymbol(char),
    UnknownToken(String),
}

impl fmt::Display for MaskParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Mask must have exactly {WORD_SIZE} outcomes, got {len}")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Invalid outcome symbol '{symbol}' (use G, Y or -)")
            }
            Self::UnknownToken(token) => {
                write!(f, "Unknown outcome '{token}' (use green, yellow or grey)")
            }
        }
    }
}

impl std::error::Error for MaskParseError {}

/// Colored feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeedbackMask([LetterOutcome; WORD_SIZE]);

impl FeedbackMask {
    /// Every letter in the right place
    pub const ALL_GREEN: Self = Self([LetterOutcome::Green; WORD_SIZE]);

    /// Create a mask from per-position outcomes
    #[inline]
    #[must_use]
    pub const fn new(outcomes: [LetterOutcome; WORD_SIZE]) -> Self {
        Self(outcomes)
    }

    /// Per-position outcomes
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_SIZE] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::ALL_GREEN
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(self, outcome: LetterOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Encode as the base-3 integer key
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{FeedbackMask, LetterOutcome::*};
    ///
    /// let mask = FeedbackMask::new([Green, Yellow, Grey, Grey, Grey]);
    /// assert_eq!(mask.key(), 2 + 1 * 3);
    /// ```
    #[must_use]
    pub fn key(self) -> u16 {
        self.0
            .iter()
            .rev()
            .fold(0, |key, outcome| key * 3 + outcome.digit())
    }

    /// Decode a base-3 integer key
    ///
    /// Returns `None` for keys outside `0..MASK_COUNT`.
    #[must_use]
    pub fn from_key(key: u16) -> Option<Self> {
        if usize::from(key) >= MASK_COUNT {
            return None;
        }

        let mut outcomes = [LetterOutcome::Grey; WORD_SIZE];
        let mut rest = key;
        for outcome in &mut outcomes {
            *outcome = LetterOutcome::from_digit(rest % 3)?;
            rest /= 3;
        }
        Some(Self(outcomes))
    }

    /// Compute the feedback the game reports when `guess` is played against `answer`
    ///
    /// Letters absent from the answer are Grey, exact position matches are Green and
    /// everything else starts out Yellow. When the guess uses a letter more often than
    /// the answer does, the surplus is taken back from that letter's Yellow marks,
    /// rightmost first. Green marks are never revisited.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{FeedbackMask, LetterOutcome::*, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let answer = Word::new("below").unwrap();
    ///
    /// // Only one L in BELOW: the leftmost Yellow survives
    /// assert_eq!(
    ///     FeedbackMask::compare(&guess, &answer),
    ///     FeedbackMask::new([Yellow, Grey, Grey, Grey, Grey])
    /// );
    /// ```
    #[must_use]
    pub fn compare(guess: &Word, answer: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Grey; WORD_SIZE];

        for (i, (&letter, outcome)) in guess.letters().iter().zip(&mut outcomes).enumerate() {
            *outcome = if !answer.contains(letter) {
                LetterOutcome::Grey
            } else if answer.letter_at(i) == letter {
                LetterOutcome::Green
            } else {
                LetterOutcome::Yellow
            };
        }

        let guess_counts = guess.letter_counts();
        let answer_counts = answer.letter_counts();

        for (index, (&in_guess, &in_answer)) in
            guess_counts.iter().zip(&answer_counts).enumerate()
        {
            if in_answer == 0 || in_guess <= in_answer {
                continue;
            }

            let letter = b'a' + index as u8;
            let mut surplus = in_guess - in_answer;
            for position in (0..WORD_SIZE).rev() {
                if surplus == 0 {
                    break;
                }
                if guess.letter_at(position) == letter
                    && outcomes[position] == LetterOutcome::Yellow
                {
                    outcomes[position] = LetterOutcome::Grey;
                    surplus -= 1;
                }
            }
        }

        Self(outcomes)
    }

    /// Convert mask to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|outcome| outcome.emoji()).collect()
    }

    /// Build a mask from one token per letter ("green", "y", "-", ...)
    ///
    /// # Errors
    /// Returns `MaskParseError` if a token is unknown or the count is not [`WORD_SIZE`].
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, MaskParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<LetterOutcome>())
            .collect::<Result<Vec<_>, _>>()?;

        let len = parsed.len();
        parsed
            .try_into()
            .map(Self)
            .map_err(|_| MaskParseError::InvalidLength(len))
    }
}

impl FromStr for FeedbackMask {
    type Err = MaskParseError;

    /// Parse a compact mask like "GY-G-", "gy_g_" or "🟩🟨⬜🟩⬜"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_SIZE {
            return Err(MaskParseError::InvalidLength(symbols.len()));
        }

        let mut outcomes = [LetterOutcome::Grey; WORD_SIZE];
        for (outcome, &symbol) in outcomes.iter_mut().zip(&symbols) {
            *outcome = LetterOutcome::from_symbol(symbol)
                .ok_or(MaskParseError::InvalidSymbol(symbol))?;
        }
        Ok(Self(outcomes))
    }
}

impl fmt::Display for FeedbackMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            let symbol = match outcome {
                LetterOutcome::Grey => '-',
                LetterOutcome::Yellow => 'Y',
                LetterOutcome::Green => 'G',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
