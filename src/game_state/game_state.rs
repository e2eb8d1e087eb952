//! Interactive game session.
//!
//! `GameState` owns the board and the move log and is the only thing that
//! mutates them. A host drives it the way a player clicks: select a piece,
//! pick one of the returned destinations, resolve a promotion if one is
//! pending, and walk back and forth through the log.
//!
//! The log is linear. `current` points at the displayed entry (`None` is the
//! initial position); entries after it are a "future" that stays reachable
//! with `step_forward` until a new move is committed, which truncates it.

use tracing::{debug, trace};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PromotionKind, Square};
use crate::game_state::history::HistoryEntry;
use crate::game_state::settings::RuleSettings;
use crate::move_generation::history_navigation::navigate;
use crate::move_generation::legal_move_apply::{commit_move, tag_check_status};
use crate::move_generation::legal_move_checks::{attackers_to_square, is_king_in_check};
use crate::move_generation::legal_move_filter::{all_legal_moves, legal_moves};
use crate::moves::move_descriptions::{CandidateMove, LastMove, MoveMap};
use crate::utils::fen_parser::parse_fen;
use crate::utils::notation::move_notation;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,

    selected: Option<Piece>,
    legal_moves_of_selection: MoveMap,

    history: Vec<HistoryEntry>,
    current: Option<usize>,
    next_move_id: u64,
    pending_promotion: Option<Square>,
    winner: Option<Color>,

    rules: RuleSettings,
    initial_board: Board,
    initial_side: Color,
    starting_fen: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the standard layout with default rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSettings::default())
    }

    pub fn with_rules(rules: RuleSettings) -> Self {
        Self::from_parts(Board::standard(), Color::White, rules, None)
    }

    /// A game starting from a custom FEN position.
    pub fn from_fen(fen: &str, rules: RuleSettings) -> ChessResult<Self> {
        let (board, side) = parse_fen(fen)?;
        Ok(Self::from_parts(board, side, rules, Some(fen.trim().to_owned())))
    }

    fn from_parts(board: Board, side: Color, rules: RuleSettings, fen: Option<String>) -> Self {
        Self {
            initial_board: board.clone(),
            board,
            side_to_move: side,
            selected: None,
            legal_moves_of_selection: MoveMap::new(),
            history: Vec::new(),
            current: None,
            next_move_id: 1,
            pending_promotion: None,
            winner: None,
            rules,
            initial_side: side,
            starting_fen: fen,
        }
    }

    // --- Read access ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.as_ref()
    }

    #[inline]
    pub fn legal_moves_of_selection(&self) -> &MoveMap {
        &self.legal_moves_of_selection
    }

    /// The whole log, including entries ahead of the displayed position.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Entries up to and including the displayed one.
    pub fn played_history(&self) -> &[HistoryEntry] {
        &self.history[..self.current.map_or(0, |i| i + 1)]
    }

    pub fn last_played(&self) -> Option<&HistoryEntry> {
        self.current.map(|i| &self.history[i])
    }

    pub fn last_played_id(&self) -> Option<u64> {
        self.last_played().map(|entry| entry.id)
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn rules(&self) -> &RuleSettings {
        &self.rules
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn initial_side(&self) -> Color {
        self.initial_side
    }

    /// The FEN this game was set up from, `None` for the standard layout.
    pub fn starting_fen(&self) -> Option<&str> {
        self.starting_fen.as_deref()
    }

    /// What en passant needs to know about the displayed move.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_played().map(HistoryEntry::last_move)
    }

    /// Legal destinations of whatever piece stands on `square`, regardless of
    /// selection or whose turn it is.
    pub fn legal_moves_at(&self, square: Square) -> MoveMap {
        let Some(piece) = self.board.get(square) else {
            return MoveMap::new();
        };
        legal_moves(piece, &self.board, self.last_move().as_ref(), self.rules.budget())
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Piece, CandidateMove)> {
        all_legal_moves(
            &self.board,
            self.side_to_move,
            self.last_move().as_ref(),
            self.rules.budget(),
        )
    }

    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move, self.rules.budget())
    }

    /// Enemy pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<Piece> {
        let king = self.board.expect_king(self.side_to_move);
        attackers_to_square(
            &self.board,
            king.square,
            self.side_to_move.opposite(),
            self.rules.budget(),
        )
    }

    fn board_input_blocked(&self) -> Option<ChessErrors> {
        if self.pending_promotion.is_some() {
            Some(ChessErrors::PromotionPending)
        } else {
            self.winner.map(ChessErrors::GameOver)
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves_of_selection.clear();
    }

    // --- Board input ---

    /// Selects the piece on `square` and returns its legal destinations.
    ///
    /// The result is empty (and nothing is selected) when the square is
    /// empty, holds an opponent's piece, holds the piece that was already
    /// selected, or board input is blocked.
    pub fn select_piece(&mut self, square: Square) -> &MoveMap {
        let reselect = self.selected.is_some_and(|p| p.square == square);
        self.clear_selection();

        if let Some(reason) = self.board_input_blocked() {
            trace!("[GAME] selection on {square} ignored: {reason}");
            return &self.legal_moves_of_selection;
        }
        if reselect {
            trace!("[GAME] {square} deselected");
            return &self.legal_moves_of_selection;
        }

        let Some(piece) = self.board.get(square).copied() else {
            return &self.legal_moves_of_selection;
        };
        if piece.color != self.side_to_move {
            return &self.legal_moves_of_selection;
        }

        self.legal_moves_of_selection =
            legal_moves(&piece, &self.board, self.last_move().as_ref(), self.rules.budget());
        self.selected = Some(piece);
        trace!(
            "[GAME] selected {:?} on {square}, {} destinations",
            piece.kind,
            self.legal_moves_of_selection.len()
        );
        &self.legal_moves_of_selection
    }

    /// Commits the selected piece's move to `destination`.
    pub fn play_move(&mut self, destination: Square) -> ChessResult<&HistoryEntry> {
        if let Some(reason) = self.board_input_blocked() {
            return self.reject(reason);
        }
        let Some(piece) = self.selected else {
            return self.reject(ChessErrors::NothingSelected);
        };
        let Some(mv) = self.legal_moves_of_selection.get(&destination).copied() else {
            return self.reject(ChessErrors::IllegalDestination(destination));
        };

        let last_move = self.last_move();
        let (next, entry) = commit_move(
            &self.board,
            &piece,
            &mv,
            last_move.as_ref(),
            self.next_move_id,
            &self.rules,
        );

        // Anything ahead of the displayed position is an abandoned future.
        self.history.truncate(self.current.map_or(0, |i| i + 1));
        self.next_move_id += 1;
        self.board = next;
        self.side_to_move = piece.color.opposite();
        self.clear_selection();

        if entry.promotes {
            self.pending_promotion = Some(entry.destination);
        } else if entry.is_checkmate {
            self.winner = Some(piece.color);
        }

        debug!("[GAME] #{} {} committed", entry.id, move_notation(&entry));
        self.history.push(entry);
        let index = self.history.len() - 1;
        self.current = Some(index);
        Ok(&self.history[index])
    }

    /// Selects the piece on `from` (unless it already is) and plays it to `to`.
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<&HistoryEntry> {
        if self.selected.map(|p| p.square) != Some(from) {
            self.select_piece(from);
        }
        self.play_move(to)
    }

    /// Turns the pawn waiting on the last rank into `kind`.
    pub fn resolve_promotion(&mut self, kind: PromotionKind) -> ChessResult<&HistoryEntry> {
        let Some(square) = self.pending_promotion else {
            return self.reject(ChessErrors::NoPromotionPending);
        };
        let Some(pawn) = self.board.get(square).copied() else {
            panic!("promotion pending on {square} but the square is empty");
        };
        let Some(index) = self.current else {
            panic!("promotion pending on {square} with no move on the log");
        };

        self.board.place(Piece {
            kind: kind.into(),
            ..pawn
        });
        self.pending_promotion = None;

        let entry = &mut self.history[index];
        entry.promotion = Some(kind);
        tag_check_status(&self.board, entry, &self.rules);
        if entry.is_checkmate {
            self.winner = Some(entry.moved_piece.color);
        }

        debug!("[GAME] #{} promoted: {}", entry.id, move_notation(entry));
        Ok(&self.history[index])
    }

    /// Ends the game with `color` conceding. Returns the winner.
    pub fn resign(&mut self, color: Color) -> ChessResult<Color> {
        if let Some(reason) = self.board_input_blocked() {
            return self.reject(reason);
        }
        let winner = color.opposite();
        self.winner = Some(winner);
        self.clear_selection();
        debug!("[GAME] {color} resigned, {winner} wins");
        Ok(winner)
    }

    // --- History navigation ---

    /// Shows the position right after the entry with `id`.
    pub fn go_to_history_entry(&mut self, id: u64) -> ChessResult<()> {
        if self.pending_promotion.is_some() {
            return self.reject(ChessErrors::PromotionPending);
        }
        let Some(index) = self.history.iter().position(|entry| entry.id == id) else {
            return self.reject(ChessErrors::UnknownHistoryEntry(id));
        };
        self.reposition(Some(index));
        Ok(())
    }

    /// Rewinds to the initial position.
    pub fn go_to_start(&mut self) -> ChessResult<()> {
        if self.pending_promotion.is_some() {
            return self.reject(ChessErrors::PromotionPending);
        }
        self.reposition(None);
        Ok(())
    }

    pub fn step_backward(&mut self) -> ChessResult<()> {
        if self.pending_promotion.is_some() {
            return self.reject(ChessErrors::PromotionPending);
        }
        match self.current {
            None => self.reject(ChessErrors::AtHistoryBoundary),
            Some(0) => {
                self.reposition(None);
                Ok(())
            }
            Some(i) => {
                self.reposition(Some(i - 1));
                Ok(())
            }
        }
    }

    pub fn step_forward(&mut self) -> ChessResult<()> {
        if self.pending_promotion.is_some() {
            return self.reject(ChessErrors::PromotionPending);
        }
        let next = self.current.map_or(0, |i| i + 1);
        if next >= self.history.len() {
            return self.reject(ChessErrors::AtHistoryBoundary);
        }
        self.reposition(Some(next));
        Ok(())
    }

    fn reposition(&mut self, target: Option<usize>) {
        if target == self.current {
            return;
        }
        navigate(&self.history, &mut self.board, self.current, target);
        self.current = target;
        self.side_to_move = match target {
            Some(i) => self.history[i].moved_piece.color.opposite(),
            None => self.initial_side,
        };
        self.clear_selection();
        debug!(
            "[GAME] showing position after {}",
            self.last_played_id()
                .map_or_else(|| "start".to_owned(), |id| format!("#{id}"))
        );
    }

    fn reject<T>(&self, reason: ChessErrors) -> ChessResult<T> {
        debug!("[GAME] rejected: {reason}");
        Err(reason)
    }
}
