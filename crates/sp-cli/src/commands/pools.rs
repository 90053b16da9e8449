use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sp_garble::SynsetCache;
use sp_garble::candidates::{faithful_pool, filter_lowercase, misleading_pool, sense_weights};
use sp_lexicon::CoarsePos;

pub fn run(word: &str, pos: &str, lexicon: &Path, seed: u64) -> Result<(), String> {
    let pos = CoarsePos::parse(pos)
        .ok_or_else(|| format!("unknown part of speech: {pos} (noun, verb, adjective, adverb)"))?;
    let lexicon = super::load_lexicon(lexicon)?;
    let mut cache = SynsetCache::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let faithful = filter_lowercase(faithful_pool(&mut cache, &lexicon, word, pos));
    let misleading = filter_lowercase(misleading_pool(&mut cache, &lexicon, word, pos, &mut rng));
    let weights = sense_weights(&mut cache, &lexicon, &faithful, pos, 1.0);

    println!("{} {word} ({pos})", "Pools for".bold());
    if faithful.is_empty() {
        println!("  faithful: {}", "(empty)".dimmed());
    } else {
        println!("  faithful:");
        for (candidate, weight) in faithful.iter().zip(&weights) {
            println!("    {candidate} ({weight:.3})");
        }
    }
    if misleading.is_empty() {
        println!("  misleading: {}", "(empty)".dimmed());
    } else {
        println!("  misleading:");
        for candidate in &misleading {
            println!("    {candidate}");
        }
    }
    Ok(())
}
