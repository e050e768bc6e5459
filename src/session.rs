use crate::config::Validate;
use crate::engine::{BotInput, Difficulty, GameState, Mark, calculate_move};
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;

/// One human-versus-computer match. The caller applies human moves and
/// asks the session to play the computer's; X always moves first.
pub struct GameSession {
    game_state: GameState,
    difficulty: Difficulty,
    human_mark: Mark,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: &GameSettings) -> Result<Self, String> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };

        Ok(Self {
            game_state: GameState::new(),
            difficulty: settings.difficulty,
            human_mark: settings.human_mark,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        // Settings validation guarantees the human mark has an opponent.
        self.human_mark.opponent().unwrap()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.game_state.is_over() && self.game_state.current_mark == self.bot_mark()
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<(), String> {
        if self.game_state.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }

        self.game_state.place_mark(index)?;
        self.log_if_over();
        Ok(())
    }

    /// Picks and applies the computer's move, returning the cell played.
    pub fn play_bot_turn(&mut self) -> Result<usize, String> {
        if !self.is_bot_turn() {
            return Err("Not the bot's turn".to_string());
        }

        let input = BotInput::from_game_state(&self.game_state);
        let index = calculate_move(self.difficulty, input, &mut self.rng)
            .ok_or_else(|| "No available moves".to_string())?;

        self.game_state.place_mark(index)?;
        log!("Bot ({:?}) played cell {}", self.bot_mark(), index);
        self.log_if_over();
        Ok(index)
    }

    /// Fresh board, X to move. Swapping sides is how the computer gets
    /// to open the next game.
    pub fn reset(&mut self, swap_sides: bool) {
        if swap_sides {
            self.human_mark = self.bot_mark();
        }
        self.game_state = GameState::new();
    }

    /// Difficulty changes take effect immediately on a fresh board,
    /// without swapping sides.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset(false);
    }

    fn log_if_over(&self) {
        if self.game_state.is_over() {
            log!("Game over: {:?}", self.game_state.status);
        }
    }
}
