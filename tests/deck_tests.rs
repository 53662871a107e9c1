//! Deck, deal and shuffle properties over many seeds.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use skyjo_engine::ai::{MovePolicy, UniformRandomPolicy};
use skyjo_engine::cards::{composition, deal, new_shuffled_deck, standard_composition, COMPOSITION, DECK_SIZE};
use skyjo_engine::core::{CardValue, GameRng, RuleSet, Seat, Seats};
use skyjo_engine::rules::Round;
use skyjo_engine::tournament::{play_round, DEFAULT_MAX_TURNS};
use skyjo_engine::zones::GRID_SIZE;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Shuffling never changes which cards are in the deck.
    #[test]
    fn shuffle_preserves_composition(seed in any::<u64>()) {
        let deck = new_shuffled_deck(&mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(composition(deck), standard_composition());
    }

    /// A deal uses every card exactly once: two grids, one discard, the rest to draw.
    #[test]
    fn deal_is_complete(seed in any::<u64>()) {
        let deck = new_shuffled_deck(&mut GameRng::new(seed));
        let top_25: Vec<CardValue> = deck.iter().rev().take(25).copied().collect();
        let dealt = deal(deck, 2).unwrap();

        prop_assert_eq!(dealt.grids.len(), 2);
        for grid in &dealt.grids {
            prop_assert_eq!(grid.positions().count(), GRID_SIZE);
            prop_assert_eq!(grid.hidden_positions().len(), GRID_SIZE);
        }
        prop_assert_eq!(dealt.discard_pile.len(), 1);
        prop_assert_eq!(dealt.draw_pile.len(), DECK_SIZE - 25);
        prop_assert_eq!(dealt.discard_pile.top(), Some(top_25[24]));

        let all = dealt
            .grids
            .iter()
            .flat_map(|grid| grid.values())
            .chain(dealt.draw_pile.as_slice().iter().copied())
            .chain(dealt.discard_pile.as_slice().iter().copied());
        prop_assert_eq!(composition(all), standard_composition());
    }

    /// A random round always ends with every card accounted for and each
    /// score equal to the sum of what is left in the grid.
    #[test]
    fn random_rounds_conserve_cards(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = new_shuffled_deck(&mut rng);
        let mut round = Round::from_deck(1, RuleSet::default(), deck, rng.fork()).unwrap();
        let policy: &dyn MovePolicy = &UniformRandomPolicy;

        let score = play_round(&mut round, &Seats::with_value(policy), &mut rng, DEFAULT_MAX_TURNS).unwrap();

        prop_assert_eq!(round.card_census(), standard_composition());
        for seat in Seat::ALL {
            let grid = round.grid(seat);
            prop_assert!(grid.is_fully_revealed());
            prop_assert_eq!(score.raw_scores[seat], grid.values().map(i32::from).sum::<i32>());
        }
    }
}

/// Chi-square check of the top card over many shuffles against the deck
/// composition. 12 degrees of freedom; 40 is far beyond the 0.1% critical
/// value, so only a biased shuffle fails.
#[test]
fn test_shuffle_top_card_distribution() {
    let shuffles = 6000;
    let mut rng = GameRng::new(2024);
    let mut observed = standard_composition();
    observed.values_mut().for_each(|count| *count = 0);

    for _ in 0..shuffles {
        let deck = new_shuffled_deck(&mut rng);
        if let Some(top) = deck.last() {
            *observed.entry(*top).or_insert(0) += 1;
        }
    }

    let chi_square: f64 = COMPOSITION
        .iter()
        .map(|&(value, copies)| {
            let expected = shuffles as f64 * copies as f64 / DECK_SIZE as f64;
            let seen = observed.get(&value).copied().unwrap_or(0) as f64;
            (seen - expected).powi(2) / expected
        })
        .sum();

    assert!(chi_square < 40.0, "chi-square {chi_square:.2} suggests a biased shuffle");
}

/// Chi-square check of where each value lands in the deck. The deck is cut
/// into five equal bands and every (band, value) count is compared with the
/// count a uniform shuffle predicts. Both margins are fixed, so there are
/// 48 degrees of freedom; 100 is far beyond the 0.1% critical value.
#[test]
fn test_shuffle_position_distribution() {
    const BANDS: usize = 5;
    let band_len = DECK_SIZE / BANDS;
    let shuffles = 2000;
    let mut rng = GameRng::new(77);
    let mut observed: Vec<FxHashMap<CardValue, usize>> = vec![FxHashMap::default(); BANDS];

    for _ in 0..shuffles {
        let deck = new_shuffled_deck(&mut rng);
        for (index, &value) in deck.iter().enumerate() {
            *observed[index / band_len].entry(value).or_insert(0) += 1;
        }
    }

    let chi_square: f64 = observed
        .iter()
        .flat_map(|band| {
            COMPOSITION.iter().map(move |&(value, copies)| {
                let expected = (shuffles * band_len * copies) as f64 / DECK_SIZE as f64;
                let seen = band.get(&value).copied().unwrap_or(0) as f64;
                (seen - expected).powi(2) / expected
            })
        })
        .sum();

    assert!(chi_square < 100.0, "chi-square {chi_square:.2} suggests a biased shuffle");
}

/// Different seeds give different orders; the same seed gives the same one.
#[test]
fn test_shuffle_determinism() {
    let a = new_shuffled_deck(&mut GameRng::new(1));
    let b = new_shuffled_deck(&mut GameRng::new(1));
    let c = new_shuffled_deck(&mut GameRng::new(2));

    assert_eq!(a, b);
    assert_ne!(a, c);
}
