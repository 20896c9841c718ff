use super::{Controls, GameStatus, LanguageNames, Navbar, Scoreboard, Translations};

/// Thai messages.
pub const TH: Translations = Translations {
    title: "เกม XO",
    navbar: Navbar {
        three: "3x3",
        four: "4x4",
        five: "5x5",
    },
    scoreboard: Scoreboard {
        player_x: "ผู้เล่น X",
        player_o: "ผู้เล่น O",
        draws: "เสมอ",
    },
    game_status: GameStatus {
        player_turn: "ตาของผู้เล่น {player}",
        player_wins: "ผู้เล่น {player} ชนะ! 🎉",
        draw: "เสมอกัน! 🤝",
    },
    controls: Controls {
        new_game: "เกมใหม่",
        reset_scores: "รีเซ็ตคะแนน",
    },
    language: LanguageNames {
        english: "English",
        thai: "ไทย",
    },
};
