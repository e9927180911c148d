use crate::display;
use crate::models::Difficulty;
use crate::scores;

pub fn show_scores(level: Option<Difficulty>) {
    let high_scores = scores::load(&scores::scores_path());
    display::show_high_scores(&high_scores, level);
}
