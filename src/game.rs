//! Match orchestration: turn alternation, extra-turn-on-hit, win detection.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::observer::Observer;
use crate::placement::try_place_fleet;
use crate::player::Combatant;

/// The two seats of a match. Side `A` acts on even turn indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// State of the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// A combatant together with the board it exclusively owns. Only the
/// opponent mutates the board, and only through `shot`.
struct Participant {
    combatant: Box<dyn Combatant>,
    board: Board,
}

/// Two participants alternating shots until one fleet is fully sunk.
pub struct Match {
    a: Participant,
    b: Participant,
    turn: u32,
    status: MatchStatus,
}

impl Match {
    /// Set up a match with both boards freshly and independently placed.
    /// Each exhausted board fill is reported and retried from scratch.
    pub fn new(
        rng: &mut SmallRng,
        a: Box<dyn Combatant>,
        b: Box<dyn Combatant>,
        observer: &mut dyn Observer,
    ) -> Self {
        let board_a = Self::placed_board(rng, Side::A, observer);
        let board_b = Self::placed_board(rng, Side::B, observer);
        Self::with_boards(board_a, board_b, a, b)
    }

    /// Set up a match over prepared boards.
    pub fn with_boards(
        board_a: Board,
        board_b: Board,
        a: Box<dyn Combatant>,
        b: Box<dyn Combatant>,
    ) -> Self {
        Self {
            a: Participant {
                combatant: a,
                board: board_a,
            },
            b: Participant {
                combatant: b,
                board: board_b,
            },
            turn: 0,
            status: MatchStatus::InProgress,
        }
    }

    fn placed_board(rng: &mut SmallRng, side: Side, observer: &mut dyn Observer) -> Board {
        loop {
            if let Some(board) = try_place_fleet(rng, BOARD_SIZE) {
                return board;
            }
            observer.board_restarted(side);
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Side acting on the next step.
    pub fn current_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::A => &self.a.board,
            Side::B => &self.b.board,
        }
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::A => &mut self.a.board,
            Side::B => &mut self.b.board,
        }
    }

    /// Run one turn of the match. The current combatant is asked for targets
    /// until one is legal; a rejected target is reported and re-prompted
    /// without consuming the turn. A hit or sink keeps the turn with the
    /// same combatant; a miss passes it. Terminal matches are left untouched.
    pub fn step(&mut self, rng: &mut SmallRng, observer: &mut dyn Observer) -> MatchStatus {
        if self.status != MatchStatus::InProgress {
            return self.status;
        }

        let side = self.current_side();
        let (attacker, defender) = match side {
            Side::A => (&mut self.a, &mut self.b),
            Side::B => (&mut self.b, &mut self.a),
        };

        let retains = loop {
            let target = attacker.combatant.select_target(rng);
            match defender.board.shot(target) {
                Ok(outcome) => {
                    observer.shot_resolved(side, target, outcome);
                    break outcome.retains_turn();
                }
                Err(err) => observer.shot_rejected(side, target, err),
            }
        };
        if !retains {
            self.turn += 1;
        }

        if self.b.board.fleet_sunk() {
            self.status = MatchStatus::Won(Side::A);
            observer.match_over(Side::A);
        } else if self.a.board.fleet_sunk() {
            self.status = MatchStatus::Won(Side::B);
            observer.match_over(Side::B);
        }
        self.status
    }

    /// Step until the match resolves; returns the winner.
    pub fn play(&mut self, rng: &mut SmallRng, observer: &mut dyn Observer) -> Side {
        loop {
            if let MatchStatus::Won(winner) = self.step(rng, observer) {
                return winner;
            }
        }
    }
}
