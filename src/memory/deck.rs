//! Deck builders
//!
//! Decks come back in build order; [`super::MemoryGame`] shuffles them when
//! a game starts.

use serde::{Deserialize, Serialize};

use super::{CardContent, MemoryCard, MemoryError, MemoryResult, NeonColor};
use crate::media::{only_images, ImageFile};
use crate::rng::ShuffleRng;

/// Minimum number of pairs in a deck
pub const MIN_PAIRS: usize = 2;

/// A complete hand-made pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPair {
    pub left: CardContent,
    pub right: CardContent,
}

/// Two identical cards per image, using at most `max_pairs` images
pub fn auto_deck(
    files: &[ImageFile],
    max_pairs: usize,
    rng: &mut ShuffleRng,
) -> MemoryResult<Vec<MemoryCard>> {
    let images = only_images(files);
    let usable = images.len().min(max_pairs);
    if usable < MIN_PAIRS {
        return Err(MemoryError::NotEnoughImages { found: usable });
    }

    let mut deck = Vec::with_capacity(usable * 2);
    for (idx, file) in images.into_iter().take(max_pairs).enumerate() {
        let color = NeonColor::random(rng);
        let pair_id = format!("pair-{}", idx);
        let content = CardContent::Image(file.image_ref.clone());

        deck.push(MemoryCard::new(
            format!("card-{}-1", idx),
            pair_id.clone(),
            content.clone(),
            color,
        ));
        deck.push(MemoryCard::new(format!("card-{}-2", idx), pair_id, content, color));
    }

    tracing::debug!(pairs = deck.len() / 2, "auto deck built");
    Ok(deck)
}

/// One left and one right card per pair
pub fn custom_deck(pairs: &[CustomPair], rng: &mut ShuffleRng) -> MemoryResult<Vec<MemoryCard>> {
    if pairs.len() < MIN_PAIRS {
        return Err(MemoryError::NotEnoughPairs { found: pairs.len() });
    }

    let mut deck = Vec::with_capacity(pairs.len() * 2);
    for (idx, pair) in pairs.iter().enumerate() {
        let color = NeonColor::random(rng);
        let pair_id = format!("pair-{}", idx);

        deck.push(MemoryCard::new(
            format!("card-{}-L", idx),
            pair_id.clone(),
            pair.left.clone(),
            color,
        ));
        deck.push(MemoryCard::new(
            format!("card-{}-R", idx),
            pair_id,
            pair.right.clone(),
            color,
        ));
    }

    tracing::debug!(pairs = pairs.len(), "custom deck built");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageFile> {
        (0..n)
            .map(|i| ImageFile::new(format!("{}.png", i), "image/png", format!("blob:{}", i)))
            .collect()
    }

    #[test]
    fn test_auto_deck_pairs_share_id_and_color() {
        let mut rng = ShuffleRng::new(3);
        let deck = auto_deck(&images(3), 10, &mut rng).unwrap();
        assert_eq!(deck.len(), 6);

        for pair in deck.chunks(2) {
            assert_eq!(pair[0].pair_id, pair[1].pair_id);
            assert_eq!(pair[0].color, pair[1].color);
            assert_eq!(pair[0].content, pair[1].content);
        }
        assert_eq!(deck[0].id, "card-0-1");
        assert_eq!(deck[1].id, "card-0-2");
    }

    #[test]
    fn test_auto_deck_caps_pairs() {
        let mut rng = ShuffleRng::new(3);
        let deck = auto_deck(&images(14), 10, &mut rng).unwrap();
        assert_eq!(deck.len(), 20);
    }

    #[test]
    fn test_auto_deck_cap_below_two_pairs() {
        let mut rng = ShuffleRng::new(3);
        assert_eq!(
            auto_deck(&images(3), 0, &mut rng),
            Err(MemoryError::NotEnoughImages { found: 0 })
        );
        assert_eq!(
            auto_deck(&images(3), 1, &mut rng),
            Err(MemoryError::NotEnoughImages { found: 1 })
        );
        assert_eq!(auto_deck(&images(3), 2, &mut rng).unwrap().len(), 4);
    }

    #[test]
    fn test_auto_deck_needs_two_images() {
        let mut rng = ShuffleRng::new(3);
        let mut files = images(1);
        files.push(ImageFile::new("a.txt", "text/plain", "a"));
        assert_eq!(
            auto_deck(&files, 10, &mut rng),
            Err(MemoryError::NotEnoughImages { found: 1 })
        );
    }

    #[test]
    fn test_custom_deck() {
        let mut rng = ShuffleRng::new(3);
        let pairs = vec![
            CustomPair {
                left: CardContent::Text("cat".into()),
                right: CardContent::Text("gato".into()),
            },
            CustomPair {
                left: CardContent::Text("dog".into()),
                right: CardContent::Image("blob:dog".into()),
            },
        ];

        let deck = custom_deck(&pairs, &mut rng).unwrap();
        let ids: Vec<_> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["card-0-L", "card-0-R", "card-1-L", "card-1-R"]);
        assert_eq!(deck[3].content, CardContent::Image("blob:dog".into()));

        assert_eq!(
            custom_deck(&pairs[..1], &mut rng),
            Err(MemoryError::NotEnoughPairs { found: 1 })
        );
    }
}
