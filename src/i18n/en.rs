use super::{Controls, GameStatus, LanguageNames, Navbar, Scoreboard, Translations};

/// English messages.
pub const EN: Translations = Translations {
    title: "Tic Tac Toe",
    navbar: Navbar {
        three: "3x3",
        four: "4x4",
        five: "5x5",
    },
    scoreboard: Scoreboard {
        player_x: "Player X",
        player_o: "Player O",
        draws: "Draws",
    },
    game_status: GameStatus {
        player_turn: "Player {player}'s Turn",
        player_wins: "Player {player} Wins! 🎉",
        draw: "It's a Draw! 🤝",
    },
    controls: Controls {
        new_game: "New Game",
        reset_scores: "Reset Scores",
    },
    language: LanguageNames {
        english: "English",
        thai: "ไทย",
    },
};
