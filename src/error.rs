use std::fmt::{self, Display};
use std::io;
use std::num::ParseIntError;

/// Errores fatales al leer la entrada del usuario.
#[derive(Debug)]
pub enum InputError {
    /// La línea `line` no es un entero.
    Parse {
        line: usize,
        input: String,
        source: ParseIntError,
    },
    /// Se terminó la entrada antes de tener todas las respuestas.
    UnexpectedEof,
    /// Entero válido pero no entra en un `usize`; guarda el texto tal cual.
    OutOfRange(String),
    /// No hay memoria para meter `chits` entradas más en el bowl.
    BowlFull { team: usize, chits: usize },
    Io(io::Error),
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Parse { line, input, .. } => {
                write!(f, "line {}: invalid integer {:?}", line, input)
            }
            InputError::UnexpectedEof => write!(f, "unexpected end of input"),
            InputError::OutOfRange(value) => write!(f, "{} is too large", value),
            InputError::BowlFull { team, chits } => {
                write!(f, "cannot fit {} chits for Team {} in the bowl", chits, team)
            }
            InputError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Parse { source, .. } => Some(source),
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}
