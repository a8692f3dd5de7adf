//! Ordered resolver chains for inputs that may be missing.
//!
//! A chain is a slice of named strategies tried in order (precise input →
//! secondary input → literal override → generic formula). The first strategy
//! that returns `Some` wins.

/// Sentinel for a lookup that could not be resolved.
pub const UNKNOWN: &str = "未知";

/// One resolution strategy over query `Q`.
pub type Resolver<Q, T> = fn(&Q) -> Option<T>;

/// A named strategy; the name only shows up in debug logs.
pub type NamedResolver<Q, T> = (&'static str, Resolver<Q, T>);

/// Run `chain` in order and return the first resolved value.
pub fn resolve_first<Q, T>(query: &Q, chain: &[NamedResolver<Q, T>]) -> Option<T> {
    for (name, resolver) in chain {
        if let Some(value) = resolver(query) {
            tracing::debug!(strategy = *name, "resolved");
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &u8) -> Option<u8> {
        None
    }

    fn double(q: &u8) -> Option<u8> {
        Some(q * 2)
    }

    fn triple(q: &u8) -> Option<u8> {
        Some(q * 3)
    }

    #[test]
    fn first_hit_wins() {
        let chain: [NamedResolver<u8, u8>; 3] =
            [("never", never), ("double", double), ("triple", triple)];
        assert_eq!(resolve_first(&4, &chain), Some(8));
    }

    #[test]
    fn empty_or_all_miss() {
        assert_eq!(resolve_first::<u8, u8>(&4, &[]), None);
        assert_eq!(resolve_first(&4, &[("never", never as Resolver<u8, u8>)]), None);
    }
}
