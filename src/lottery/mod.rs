mod pick;
pub mod pool;

pub use pool::Pool;

/// Identificador de un equipo: entero secuencial que empieza en 1.
pub type TeamId = usize;

/// Estado final de un sorteo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Se sacó un chit del bowl; el dueño gana.
    Winner(TeamId),
    /// El bowl quedó vacío: no hay sorteo.
    Empty,
}

impl Outcome {
    /// Sortea un ganador del `pool`, o `Outcome::Empty` si no hay chits.
    pub fn draw<R: rand::Rng + ?Sized>(pool: &Pool, rng: &mut R) -> Self {
        match pool.draw(rng) {
            Some(team) => Outcome::Winner(team),
            None => Outcome::Empty,
        }
    }

    pub fn winner(self) -> Option<TeamId> {
        match self {
            Outcome::Winner(team) => Some(team),
            Outcome::Empty => None,
        }
    }
}
