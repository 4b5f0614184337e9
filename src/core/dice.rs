//! Dice.
//!
//! A game rolls two independent dice. Each die is either random (its own
//! `GameRng` stream) or loaded with a fixed cyclic sequence of faces for
//! deterministic play.

use serde::{Deserialize, Serialize};

use super::config::{DIE_FACES, MAX_DIE_FACES};
use super::rng::GameRng;

#[derive(Clone, Debug, Serialize, Deserialize)]
enum Source {
    Random(GameRng),
    Loaded { faces: Vec<u8>, next: usize },
}

/// A single die.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dice {
    faces: u8,
    source: Source,
}

impl Dice {
    /// A fair four-sided die driven by `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_faces(DIE_FACES, rng)
    }

    /// A fair die with `faces` sides.
    #[must_use]
    pub fn with_faces(faces: u8, rng: GameRng) -> Self {
        assert!(
            (1..=MAX_DIE_FACES).contains(&faces),
            "A die needs between 1 and {MAX_DIE_FACES} faces"
        );
        Self {
            faces,
            source: Source::Random(rng),
        }
    }

    /// A die that replays `rolls` in order, cycling when exhausted.
    ///
    /// ```
    /// use rust_monopoly::core::Dice;
    ///
    /// let mut die = Dice::loaded([2, 4]);
    /// assert_eq!(die.roll(), 2);
    /// assert_eq!(die.roll(), 4);
    /// assert_eq!(die.roll(), 2);
    /// ```
    #[must_use]
    pub fn loaded(rolls: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = rolls.into_iter().collect();
        assert!(!faces.is_empty(), "A loaded die needs at least one roll");
        let max = faces.iter().copied().max().unwrap_or(1);
        assert!(
            faces.iter().all(|&f| (1..=MAX_DIE_FACES).contains(&f)),
            "Loaded faces must be between 1 and {MAX_DIE_FACES}"
        );

        Self {
            faces: max.max(DIE_FACES),
            source: Source::Loaded { faces, next: 0 },
        }
    }

    /// Number of faces.
    #[must_use]
    pub fn faces(&self) -> u8 {
        self.faces
    }

    /// Check a die that did not come from this module's constructors.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_DIE_FACES).contains(&self.faces) {
            return Err(format!("die with {} faces", self.faces));
        }
        if let Source::Loaded { faces, next } = &self.source {
            if faces.is_empty() {
                return Err("loaded die with no rolls".to_string());
            }
            if let Some(bad) = faces.iter().find(|&&f| f == 0 || f > self.faces) {
                return Err(format!("loaded roll {bad} on a {}-sided die", self.faces));
            }
            if *next >= faces.len() {
                return Err(format!("loaded die cursor {next} past {} rolls", faces.len()));
            }
        }
        Ok(())
    }

    /// Roll once.
    pub fn roll(&mut self) -> u8 {
        match &mut self.source {
            Source::Random(rng) => rng.gen_range_inclusive(1, i64::from(self.faces)) as u8,
            Source::Loaded { faces, next } => {
                let face = faces[*next % faces.len()];
                *next = (*next + 1) % faces.len();
                face
            }
        }
    }
}
