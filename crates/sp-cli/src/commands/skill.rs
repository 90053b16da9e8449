use sp_garble::skill_level_from_roll;

pub fn run(roll: f64, difficulty: f64) -> Result<(), String> {
    let level = skill_level_from_roll(roll, difficulty);
    println!("{level:.4}");
    Ok(())
}
