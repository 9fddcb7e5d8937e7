use std::collections::{BTreeMap, TryReserveError};
use std::iter;

use rand::Rng;
use tracing::debug;

use super::{pick, TeamId};

/// El "bowl": un chit por entrada, con el id de su equipo.
///
/// Invariante: `entries.len()` es siempre la suma de los chits registrados.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    /// Un `TeamId` por cada chit.
    entries: Vec<TeamId>,
    /// Chits por equipo; el índice 0 es el equipo 1.
    chits: Vec<usize>,
}

impl Pool {
    /// Crea un bowl vacío, sin equipos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arma el bowl a partir de los chits de cada equipo (`chits[0]` es el equipo 1).
    ///
    /// ```rust
    /// use sorteo::lottery::Pool;
    ///
    /// let pool = Pool::from_chits(&[2, 1]);
    /// assert_eq!(pool.entries(), &[1, 1, 2]);
    /// ```
    pub fn from_chits(chits: &[usize]) -> Self {
        let mut pool = Self::new();
        for &c in chits {
            pool.add_team(c);
        }
        pool
    }

    /// Registra el siguiente equipo con `chits` entradas y devuelve su id.
    ///
    /// Un equipo con 0 chits queda registrado pero no agrega nada al bowl.
    pub fn add_team(&mut self, chits: usize) -> TeamId {
        let team = self.chits.len() + 1;
        self.entries.extend(iter::repeat(team).take(chits));
        self.chits.push(chits);
        debug!(team, chits, pool_size = self.entries.len(), "team registered");
        team
    }

    /// Como `add_team`, pero si no hay memoria para los `chits` devuelve error
    /// en vez de abortar. El bowl no cambia en ese caso.
    pub fn try_add_team(&mut self, chits: usize) -> Result<TeamId, TryReserveError> {
        self.entries.try_reserve(chits)?;
        Ok(self.add_team(chits))
    }

    /// Cantidad total de chits en el bowl.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cantidad de equipos registrados (incluye los que tienen 0 chits).
    pub fn teams(&self) -> usize {
        self.chits.len()
    }

    /// Chits del equipo `team`, o `None` si ese id no existe.
    pub fn chits_of(&self, team: TeamId) -> Option<usize> {
        team.checked_sub(1).and_then(|idx| self.chits.get(idx).copied())
    }

    pub fn entries(&self) -> &[TeamId] {
        &self.entries
    }

    /// Saca un chit al azar. `None` si el bowl está vacío.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TeamId> {
        pick::pick(&self.entries, rng)
    }

    /// Repite `rounds` sorteos independientes (con reposición) y cuenta cuántas
    /// veces ganó cada equipo. Todos los equipos registrados aparecen, aunque
    /// sea con 0.
    pub fn tally<R: Rng + ?Sized>(&self, rng: &mut R, rounds: u32) -> BTreeMap<TeamId, u32> {
        let mut counts: BTreeMap<TeamId, u32> = (1..=self.teams()).map(|t| (t, 0)).collect();
        if self.is_empty() {
            return counts;
        }
        for _ in 0..rounds {
            if let Some(team) = self.draw(rng) {
                *counts.entry(team).or_insert(0) += 1;
            }
        }
        counts
    }
}
