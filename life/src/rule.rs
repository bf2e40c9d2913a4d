use crate::grid::State;

/// B3/S23: a live cell survives on 2 or 3 neighbours, a dead cell is born on
/// exactly 3, everything else is dead next generation.
pub fn next_state(current: State, live_neighbours: u8) -> State {
    match (current, live_neighbours) {
        (State::Alive, 2 | 3) | (State::Dead, 3) => State::Alive,
        _ => State::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        use State::*;
        for n in 0..=8 {
            let survives = matches!(n, 2 | 3);
            assert_eq!(next_state(Alive, n), State::from(survives), "alive, {n}");
            assert_eq!(next_state(Dead, n), State::from(n == 3), "dead, {n}");
        }
    }
}
