use std::io::Read;
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sp_garble::{GarbleConfig, Garbler, skill_level_from_roll};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &Path,
    lexicon: &Path,
    skill: Option<f64>,
    roll: Option<f64>,
    difficulty: Option<f64>,
    seed: u64,
    terms: &[String],
    annotate: bool,
) -> Result<(), String> {
    let skill_level = match (skill, roll, difficulty) {
        (Some(level), _, _) => level,
        (None, Some(roll), Some(difficulty)) => skill_level_from_roll(roll, difficulty),
        _ => return Err("provide either --skill or --roll with --difficulty".into()),
    };
    if !(0.0..=1.0).contains(&skill_level) {
        return Err(format!("skill level must be in [0, 1], got {skill_level}"));
    }

    let text = read_input(file)?;
    let lexicon = super::load_lexicon(lexicon)?;
    let config = GarbleConfig::default().with_annotations(annotate);
    let mut garbler =
        Garbler::with_config(lexicon, config).map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed);

    eprintln!(
        "  {} skill {skill_level:.2} | seed {seed}",
        "Garbling".bold()
    );
    println!("{}", garbler.garble(&text, skill_level, terms, &mut rng));
    Ok(())
}

fn read_input(file: &Path) -> Result<String, String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| e.to_string())?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).map_err(|e| format!("{}: {e}", file.display()))
    }
}
