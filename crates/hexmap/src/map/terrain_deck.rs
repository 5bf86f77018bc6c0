use crate::map::{DeckError, Terrain};
use rand::{seq::SliceRandom, Rng};

/// Number of cards per terrain in a full deck.
pub const DECK_COMPOSITION: [(Terrain, usize); 5] = [
    (Terrain::Desert, 8),
    (Terrain::Forest, 7),
    (Terrain::Mountain, 6),
    (Terrain::Water, 4),
    (Terrain::Any, 2),
];

pub const DECK_SIZE: usize = 27;

/// Shuffled bag of terrain cards, drawn without replacement.
#[derive(Debug, Clone)]
pub struct TerrainDeck {
    cards: Vec<Terrain>,
}

impl TerrainDeck {
    /// Create a full deck shuffled with the thread local generator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Create a full deck shuffled with the given generator.
    pub fn with_rng<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (terrain, count) in DECK_COMPOSITION {
            cards.extend(std::iter::repeat_n(terrain, count));
        }
        cards.shuffle(rng);
        log::debug!("Deck shuffled with {} cards", cards.len());
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Terrain, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
