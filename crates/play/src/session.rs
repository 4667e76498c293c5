//! Text game loop between a human and an engine

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{
    engine_turn, has_moves, moves_from, parse_move, parse_square, Board, Color, Engine, Outcome,
    Turn,
};
use tracing::{debug, info};

use crate::config::PlayConfig;

const HELP: &str = "\
Enter moves in coordinate notation, e.g. e2e4.
Commands:
  moves <square>  list destinations of the piece on <square>
  board           print the board
  help            show this text
  quit            leave the game";

pub struct Session {
    engine: Box<dyn Engine>,
    engine_side: Color,
    show_score: bool,
    board: Board,
    to_move: Color,
}

impl Session {
    pub fn new(engine: Box<dyn Engine>, config: &PlayConfig, board: Board) -> Self {
        Self {
            engine,
            engine_side: config.engine_side,
            show_score: config.show_score,
            board,
            to_move: Color::White,
        }
    }

    /// Plays until one side runs out of moves or the input ends. Returns
    /// `None` when the human quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<Option<Outcome>> {
        let human = self.engine_side.other();
        writeln!(out, "You play {human}, {} plays {}.", self.engine.name(), self.engine_side)?;
        writeln!(out, "{HELP}")?;
        write!(out, "\n{}", self.board)?;

        let mut lines = input.lines();
        loop {
            if self.to_move == self.engine_side {
                if let Some(outcome) = self.engine_move(&mut out)? {
                    return Ok(Some(outcome));
                }
                continue;
            }

            if !has_moves(&self.board, human) {
                report(&mut out, Outcome::EngineWins)?;
                return Ok(Some(Outcome::EngineWins));
            }

            write!(out, "{human}> ")?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(None),
            };
            let line = line.trim();

            match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [] => {}
                ["quit"] | ["exit"] => return Ok(None),
                ["help"] => writeln!(out, "{HELP}")?,
                ["board"] => write!(out, "{}", self.board)?,
                ["moves", square] => match parse_square(square) {
                    Ok(from) => {
                        let targets: Vec<String> =
                            moves_from(&self.board, from.row as i8, from.col as i8)
                                .iter()
                                .map(|s| s.to_string())
                                .collect();
                        writeln!(out, "{}: {}", from, targets.join(" "))?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                },
                _ => match parse_move(&self.board, human, line) {
                    Ok(mv) => {
                        debug!(mv = %mv, "human move");
                        self.board = self.board.apply(mv);
                        self.to_move = self.engine_side;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                },
            }
        }
    }

    fn engine_move<W: Write>(&mut self, out: &mut W) -> Result<Option<Outcome>> {
        match engine_turn(self.engine.as_mut(), &self.board, self.engine_side) {
            Turn::Over(outcome) => {
                report(out, outcome)?;
                Ok(Some(outcome))
            }
            Turn::Played { mv, board, outcome } => {
                self.board = board;
                self.to_move = self.engine_side.other();
                writeln!(out, "{} plays {mv}", self.engine.name())?;
                if self.show_score {
                    writeln!(out, "score: {:+.1}", chess_core::score(&self.board))?;
                }
                write!(out, "{}", self.board)?;
                if let Some(outcome) = outcome {
                    report(out, outcome)?;
                }
                Ok(outcome)
            }
        }
    }
}

fn report<W: Write>(out: &mut W, outcome: Outcome) -> Result<()> {
    info!(?outcome, "game over");
    match outcome {
        Outcome::HumanWins => writeln!(out, "You win: the engine has no legal moves.")?,
        Outcome::EngineWins => writeln!(out, "The engine wins: you have no legal moves.")?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
