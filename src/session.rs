use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use rand::Rng;
use tracing::{info, warn};

use crate::error::InputError;
use crate::lottery::{Outcome, Pool};

pub const EMPTY_BOWL: &str = "No chits in the bowl. Cannot draw.";

/// Una sesión interactiva: pregunta, arma el bowl, sortea y muestra el resultado.
///
/// Funciona sobre cualquier `BufRead`/`Write`, así que se puede manejar con
/// buffers en memoria:
///
/// ```rust
/// use std::io::Cursor;
/// use rand::{rngs::StdRng, SeedableRng};
/// use sorteo::lottery::Outcome;
/// use sorteo::session::Session;
///
/// let mut session = Session::new(Cursor::new("1\n5\n"), Vec::new());
/// let outcome = session.run(&mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(outcome, Outcome::Winner(1));
/// ```
pub struct Session<R, W> {
    input: R,
    out: W,
    /// Líneas leídas hasta ahora (para los mensajes de error).
    line: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out, line: 0 }
    }

    /// Flujo completo: `collect` → sorteo → `report`.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Outcome, InputError> {
        let pool = self.collect()?;
        let outcome = Outcome::draw(&pool, rng);
        self.report(outcome)?;
        Ok(outcome)
    }

    /// Pregunta la cantidad de equipos y los chits de cada uno.
    pub fn collect(&mut self) -> Result<Pool, InputError> {
        let teams = self.ask_count("Enter number of teams: ")?;
        let mut pool = Pool::new();
        for team in 1..=teams {
            let chits = self.ask_count(&format!("Enter number of chits for Team {}: ", team))?;
            pool.try_add_team(chits)
                .map_err(|_| InputError::BowlFull { team, chits })?;
        }
        Ok(pool)
    }

    pub fn report(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Winner(team) => {
                info!(team, "winner drawn");
                writeln!(self.out, "\n🎉 Team {} won the draw!", team)?;
            }
            Outcome::Empty => {
                warn!("empty bowl, nothing to draw");
                writeln!(self.out, "{}", EMPTY_BOWL)?;
            }
        }
        self.out.flush()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Lee un entero; los negativos cuentan como 0.
    fn ask_count(&mut self, prompt: &str) -> Result<usize, InputError> {
        let value = self.ask(prompt)?;
        if value < 0 {
            warn!(value, "negative count treated as zero");
            return Ok(0);
        }
        usize::try_from(value).map_err(|_| InputError::OutOfRange(value.to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Result<i64, InputError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        self.line += 1;

        let text = buf.trim();
        match text.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(source) => match source.kind() {
                IntErrorKind::PosOverflow => Err(InputError::OutOfRange(text.to_string())),
                // Muy negativo: igual termina contando como 0.
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(InputError::Parse {
                    line: self.line,
                    input: text.to_string(),
                    source,
                }),
            },
        }
    }
}
