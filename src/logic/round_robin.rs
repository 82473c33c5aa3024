//! Round-robin match counting.

/// Matches in a round-robin group of `players`: everyone plays everyone else once.
pub fn round_robin_matches(players: u32) -> u32 {
    if players <= 1 {
        return 0;
    }
    let n = u64::from(players);
    u32::try_from(n * (n - 1) / 2).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::round_robin_matches;

    #[test]
    fn small_groups() {
        assert_eq!(round_robin_matches(0), 0);
        assert_eq!(round_robin_matches(1), 0);
        assert_eq!(round_robin_matches(2), 1);
        assert_eq!(round_robin_matches(3), 3);
        assert_eq!(round_robin_matches(8), 28);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(round_robin_matches(u32::MAX), u32::MAX);
    }
}
