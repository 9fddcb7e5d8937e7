use rand::Rng;

/// Sorteo uniforme sobre las entradas del bowl.
///
/// Cada entrada (un chit) tiene la misma probabilidad, así que un equipo gana
/// con probabilidad `chits / total`.
pub(super) fn pick<T: Copy, R: Rng + ?Sized>(entries: &[T], rng: &mut R) -> Option<T> {
    if entries.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..entries.len());
    Some(entries[pick])
}
