//! Repetition counts: `{m}`, `{m,n}`, `{,n}`.

use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::{CountProblem, Mode, Parser, PatternError, PatternErrorKind};

impl Parser<'_> {
    /// Parse a `{}` count and return its validated `(min, max)` bounds.
    pub(crate) fn parse_count(&mut self) -> Result<(usize, usize), PatternError> {
        let open = self.cursor.position();
        self.modes.push(Mode::Count);
        self.cursor.advance();

        // One slot per comma-separated argument; `None` when left empty.
        let mut args: SmallVec<[Option<usize>; 2]> = smallvec![None];
        loop {
            let index = self.cursor.position();
            match self.cursor.current() {
                None => return Err(self.unterminated(Mode::Count)),
                Some('}') => {
                    self.cursor.advance();
                    break;
                }
                Some(',') => {
                    if args.len() == 2 {
                        return Err(self.count_error(CountProblem::TooManyArguments, index));
                    }
                    args.push(None);
                }
                Some(c) => {
                    let Some(digit) = c.to_digit(10) else {
                        return Err(self.count_error(CountProblem::NonDigit(c), index));
                    };
                    if let Some(slot) = args.last_mut() {
                        let value = slot
                            .unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(digit as usize));
                        let Some(value) = value else {
                            return Err(self.count_error_span(CountProblem::TooLarge, open));
                        };
                        *slot = Some(value);
                    }
                }
            }
            self.cursor.advance();
        }

        let bounds = match *args.as_slice() {
            [Some(exact)] => Ok((exact, exact)),
            [None] | [None, None] => Err(CountProblem::MissingArgument),
            [_, None] => Err(CountProblem::Unbounded),
            [min, Some(max)] => {
                let min = min.unwrap_or(0);
                if min > max {
                    Err(CountProblem::MinExceedsMax { min, max })
                } else {
                    Ok((min, max))
                }
            }
            _ => Err(CountProblem::TooManyArguments),
        };

        let (min, max) = bounds.map_err(|problem| self.count_error_span(problem, open))?;
        let limit = self.options.max_repetition();
        if max > limit {
            return Err(self.count_error_span(CountProblem::ExceedsLimit { max, limit }, open));
        }

        self.modes.pop(Mode::Count);
        trace!(min, max, "count");
        Ok((min, max))
    }

    /// Problem with the single character at `index`.
    #[cold]
    fn count_error(&self, problem: CountProblem, index: usize) -> PatternError {
        self.error_at(PatternErrorKind::InvalidCount(problem), index)
    }

    /// Problem with the whole count starting at `open`.
    #[cold]
    fn count_error_span(&self, problem: CountProblem, open: usize) -> PatternError {
        self.error_from(PatternErrorKind::InvalidCount(problem), open)
    }
}
