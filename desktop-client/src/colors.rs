use common::games::tictactoe::{GameMode, Outcome, Player};
use eframe::egui::Color32;

const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
const GRAY: Color32 = Color32::from_rgb(180, 180, 180);
const RED: Color32 = Color32::from_rgb(255, 0, 0);
const GREEN: Color32 = Color32::from_rgb(0, 255, 0);
const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
const CROSS_COLOR: Color32 = Color32::from_rgb(0, 200, 233);

/// Colors that replace the whole board once a round is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeTint {
    pub first_won: Color32,
    pub second_won: Color32,
    pub draw: Color32,
}

impl OutcomeTint {
    fn for_outcome(&self, outcome: Outcome) -> Option<Color32> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Win(Player::First) => Some(self.first_won),
            Outcome::Win(Player::Second) => Some(self.second_won),
            Outcome::Draw => Some(self.draw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub grid: Color32,
    pub first: Color32,
    pub second: Color32,
    pub outcome_tint: Option<OutcomeTint>,
}

impl Palette {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::TwoPlayer => Self::two_player(),
            GameMode::VsComputer => Self::vs_computer(),
        }
    }

    pub fn two_player() -> Self {
        Self {
            background: BLACK,
            grid: WHITE,
            first: CIRCLE_COLOR,
            second: CROSS_COLOR,
            outcome_tint: None,
        }
    }

    pub fn vs_computer() -> Self {
        Self {
            background: BLACK,
            grid: WHITE,
            first: GREEN,
            second: GREEN,
            outcome_tint: Some(OutcomeTint {
                first_won: GREEN,
                second_won: RED,
                draw: GRAY,
            }),
        }
    }

    fn tint(&self, outcome: Outcome) -> Option<Color32> {
        self.outcome_tint.and_then(|tint| tint.for_outcome(outcome))
    }

    pub fn grid_color(&self, outcome: Outcome) -> Color32 {
        self.tint(outcome).unwrap_or(self.grid)
    }

    pub fn mark_color(&self, player: Player, outcome: Outcome) -> Color32 {
        self.tint(outcome).unwrap_or(match player {
            Player::First => self.first,
            Player::Second => self.second,
        })
    }

    pub fn winning_line_color(&self, player: Player) -> Color32 {
        self.mark_color(player, Outcome::Win(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_marks_keep_their_colors_after_win() {
        let palette = Palette::two_player();
        let outcome = Outcome::Win(Player::Second);
        assert_eq!(palette.mark_color(Player::First, outcome), CIRCLE_COLOR);
        assert_eq!(palette.mark_color(Player::Second, outcome), CROSS_COLOR);
        assert_eq!(palette.grid_color(outcome), WHITE);
        assert_eq!(palette.winning_line_color(Player::Second), CROSS_COLOR);
    }

    #[test]
    fn test_vs_computer_tints_by_outcome() {
        let palette = Palette::vs_computer();
        assert_eq!(palette.grid_color(Outcome::Ongoing), WHITE);
        assert_eq!(palette.mark_color(Player::Second, Outcome::Ongoing), GREEN);
        assert_eq!(palette.grid_color(Outcome::Win(Player::First)), GREEN);
        assert_eq!(palette.mark_color(Player::First, Outcome::Win(Player::Second)), RED);
        assert_eq!(palette.grid_color(Outcome::Draw), GRAY);
    }
}
