use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::counter::KEYWORD;
use crate::domain::model::TextCorpus;

pub const MIN_MENTIONS: usize = 20;
pub const MAX_MENTIONS: usize = 200;

const MIN_FILLER: usize = 3;
const MAX_FILLER: usize = 6;

/// Filler mixed into generated corpora. None of these sentences may
/// contain the keyword, or the embedded-count guarantee breaks.
const FILLER_SENTENCES: [&str; 6] = [
    "Just sharing my thoughts on technology and innovation.",
    "Another day, another great project to work on.",
    "The future of social media looks bright!",
    "Working on some exciting new features.",
    "Love connecting with the tech community.",
    "Exploring new opportunities in digital space.",
];

/// Generates a plausible-looking corpus with an exactly-known number of
/// keyword mentions. Pure apart from the injected random source, so tests
/// can drive it with a seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Draws a mention target uniformly from [MIN_MENTIONS, MAX_MENTIONS]
    /// and builds a corpus around it.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TextCorpus {
        let target = rng.gen_range(MIN_MENTIONS..=MAX_MENTIONS);
        self.generate_with_target(target, rng)
    }

    /// Builds a corpus containing exactly `target` keyword mentions:
    /// a handful of filler sentences sampled without repetition, `target`
    /// indexed mention fragments, and the whole sequence shuffled before
    /// joining.
    pub fn generate_with_target<R: Rng + ?Sized>(&self, target: usize, rng: &mut R) -> TextCorpus {
        let filler_count = rng.gen_range(MIN_FILLER..=MAX_FILLER);
        let mut fragments: Vec<String> = FILLER_SENTENCES
            .choose_multiple(rng, filler_count)
            .map(|s| s.to_string())
            .collect();

        for index in 1..=target {
            fragments.push(mention_fragment(index, rng));
        }

        fragments.shuffle(rng);
        TextCorpus::new(fragments)
    }
}

/// Every template embeds the keyword exactly once.
fn mention_fragment<R: Rng + ?Sized>(index: usize, rng: &mut R) -> String {
    match rng.gen_range(0..8) {
        0 => format!("Working on {} integration {}. Amazing technology!", KEYWORD, index),
        1 => format!("Just implemented {} feature {}. Game changer!", KEYWORD, index),
        2 => format!("Exploring {} capabilities {}. Very impressive!", KEYWORD, index),
        3 => format!("{} integration {} completed successfully.", KEYWORD, index),
        4 => format!("Team is loving the {} platform {}.", KEYWORD, index),
        5 => format!("{} {} is revolutionizing our workflow.", KEYWORD, index),
        6 => format!("Just discovered {} {}. Mind blown!", KEYWORD, index),
        _ => format!("{} {} implementation going smoothly.", KEYWORD, index),
    }
}
