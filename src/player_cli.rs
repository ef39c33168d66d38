#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::coord::Coord;
use crate::player::Combatant;

/// Source of validated target input for an interactive combatant. An
/// implementation re-prompts until it can return a syntactically valid
/// 1-indexed coordinate pair, or `None` once the input source is exhausted;
/// the pair is not checked against the board here, only against the input
/// grammar.
pub trait InputPort {
    fn read_target(&mut self) -> Option<(usize, usize)>;
}

/// Parse a line as exactly two whitespace-separated decimal integers.
fn parse_target(line: &str) -> Result<(usize, usize), &'static str> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err("enter exactly two coordinates");
    };
    match (x.parse(), y.parse()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err("coordinates must be numbers"),
    }
}

/// `InputPort` backed by a buffered reader. Prompts per line, re-prompts on
/// invalid lines and reports end of input as `None`.
pub struct LineInput<R> {
    reader: R,
}

impl LineInput<io::StdinLock<'static>> {
    /// Port reading from stdin. Holds the stdin lock for its lifetime.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputPort for LineInput<R> {
    fn read_target(&mut self) -> Option<(usize, usize)> {
        loop {
            print!("Fire a salvo: ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if self.reader.read_line(&mut line).unwrap_or(0) == 0 {
                return None;
            }
            match parse_target(&line) {
                Ok(pair) => return Some(pair),
                Err(msg) => println!("  {msg}"),
            }
        }
    }
}

/// Human-driven combatant. Delegates target selection to an [`InputPort`]
/// and converts its 1-indexed pair to grid coordinates. An exhausted port
/// means the player walked away; the process ends cleanly rather than
/// re-prompting a source that can never answer.
pub struct InteractiveCombatant<I: InputPort> {
    input: I,
}

impl<I: InputPort> InteractiveCombatant<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: InputPort> Combatant for InteractiveCombatant<I> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> Coord {
        match self.input.read_target() {
            Some((x, y)) => Coord::new(x as i32 - 1, y as i32 - 1),
            None => {
                println!("Input closed, abandoning the match.");
                std::process::exit(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::{parse_target, InputPort, InteractiveCombatant, LineInput};
    use crate::coord::Coord;
    use crate::player::Combatant;

    #[test]
    fn parses_two_integers() {
        assert_eq!(parse_target("3 5"), Ok((3, 5)));
        assert_eq!(parse_target("  1\t2 "), Ok((1, 2)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_target("").is_err());
        assert!(parse_target("1").is_err());
        assert!(parse_target("1 2 3").is_err());
        assert!(parse_target("a b").is_err());
    }

    #[test]
    fn line_input_skips_invalid_lines_and_reports_eof() {
        let mut port = LineInput::new(Cursor::new("one two\n4\n2 3\n"));
        assert_eq!(port.read_target(), Some((2, 3)));
        assert_eq!(port.read_target(), None);
    }

    struct FixedInput(usize, usize);

    impl InputPort for FixedInput {
        fn read_target(&mut self) -> Option<(usize, usize)> {
            Some((self.0, self.1))
        }
    }

    #[test]
    fn interactive_converts_one_indexed_input() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut combatant = InteractiveCombatant::new(FixedInput(3, 5));
        assert_eq!(combatant.select_target(&mut rng), Coord::new(2, 4));

        let mut combatant = InteractiveCombatant::new(FixedInput(1, 1));
        assert_eq!(combatant.select_target(&mut rng), Coord::new(0, 0));
    }
}
