//! A series of games between two named players.
//!
//! `MatchSession` is the surface a presentation layer talks to. It forwards
//! board input to the current `GameState`, keeps the scoreboard in step with
//! game outcomes, and handles `new_game` / `rematch`.

use rand::Rng;
use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, PromotionKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::history::HistoryEntry;
use crate::game_state::scoreboard::Scoreboard;
use crate::game_state::settings::GameSettings;
use crate::moves::move_descriptions::MoveMap;
use crate::utils::pgn::write_pgn;
use crate::utils::playout::{random_playout, PlayoutReport};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone)]
pub struct MatchSession {
    game: GameState,
    scoreboard: Scoreboard,
    settings: GameSettings,
    /// Whether the current game's winner has been added to the scoreboard.
    outcome_recorded: bool,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl MatchSession {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: GameState::with_rules(settings.rules),
            scoreboard: Scoreboard::new(&settings.white_name, &settings.black_name),
            settings,
            outcome_recorded: false,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[inline]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Applies a textual option. Names and orientation take effect at once;
    /// rule changes apply from the next game.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.settings.set_option(name, value)?;
        self.scoreboard.set_name(Color::White, &self.settings.white_name);
        self.scoreboard.set_name(Color::Black, &self.settings.black_name);
        Ok(())
    }

    pub fn set_player_name(&mut self, color: Color, name: &str) -> ChessResult<()> {
        let option = match color {
            Color::White => "WhiteName",
            Color::Black => "BlackName",
        };
        self.set_option(option, name)
    }

    pub fn select_piece(&mut self, square: Square) -> &MoveMap {
        self.game.select_piece(square)
    }

    pub fn play_move(&mut self, destination: Square) -> ChessResult<HistoryEntry> {
        let entry = self.game.play_move(destination)?.clone();
        self.record_outcome();
        Ok(entry)
    }

    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<HistoryEntry> {
        let entry = self.game.play(from, to)?.clone();
        self.record_outcome();
        Ok(entry)
    }

    pub fn resolve_promotion(&mut self, kind: PromotionKind) -> ChessResult<HistoryEntry> {
        let entry = self.game.resolve_promotion(kind)?.clone();
        self.record_outcome();
        Ok(entry)
    }

    pub fn resign(&mut self, color: Color) -> ChessResult<Color> {
        let winner = self.game.resign(color)?;
        self.record_outcome();
        Ok(winner)
    }

    /// Finishes the current game with random legal moves (see `utils::playout`).
    pub fn random_playout<R: Rng>(
        &mut self,
        rng: &mut R,
        max_plies: usize,
    ) -> ChessResult<PlayoutReport> {
        let report = random_playout(&mut self.game, rng, max_plies)?;
        self.record_outcome();
        Ok(report)
    }

    pub fn go_to_history_entry(&mut self, id: u64) -> ChessResult<()> {
        self.game.go_to_history_entry(id)
    }

    pub fn go_to_start(&mut self) -> ChessResult<()> {
        self.game.go_to_start()
    }

    pub fn step_backward(&mut self) -> ChessResult<()> {
        self.game.step_backward()
    }

    pub fn step_forward(&mut self) -> ChessResult<()> {
        self.game.step_forward()
    }

    /// Starts over: fresh board, zeroed scores, White at the bottom.
    pub fn new_game(&mut self) {
        self.scoreboard.reset();
        self.settings.flip = false;
        self.start_fresh_game();
        debug!("[MATCH] new game, scores reset");
    }

    /// Plays again with scores kept and the board turned around.
    pub fn rematch(&mut self) {
        self.settings.flip = !self.settings.flip;
        self.start_fresh_game();
        debug!(
            "[MATCH] rematch, score {}-{}",
            self.scoreboard.score(Color::White).value,
            self.scoreboard.score(Color::Black).value
        );
    }

    fn start_fresh_game(&mut self) {
        self.game = GameState::with_rules(self.settings.rules);
        self.outcome_recorded = false;
    }

    fn record_outcome(&mut self) {
        if self.outcome_recorded {
            return;
        }
        if let Some(winner) = self.game.winner() {
            self.scoreboard.award(winner);
            self.outcome_recorded = true;
            debug!("[MATCH] {} wins", self.scoreboard.name(winner));
        }
    }

    /// The displayed board as text, oriented per the `flip` setting.
    pub fn render(&self) -> String {
        render_board(self.game.board(), self.settings.flip)
    }

    /// The displayed game as PGN, dated today.
    pub fn pgn(&self) -> String {
        write_pgn(
            &self.game,
            self.scoreboard.name(Color::White),
            self.scoreboard.name(Color::Black),
            chrono::Local::now().date_naive(),
        )
    }
}
