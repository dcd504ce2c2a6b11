// mousey/src/evolution.rs
use educe_core::player::PlayerKind;
use strum::IntoEnumIterator;

/// The form after `kind`, or `kind` itself at the top of the chain.
pub fn next_kind(kind: PlayerKind) -> PlayerKind {
    let mut iter = PlayerKind::iter().skip_while(|k| *k != kind);
    iter.next();
    iter.next().unwrap_or(kind)
}

/// The form before `kind`, or the base form at the bottom.
pub fn previous_kind(kind: PlayerKind) -> PlayerKind {
    let mut previous = PlayerKind::iter().next().unwrap_or_default();
    for candidate in PlayerKind::iter() {
        if candidate == kind {
            return previous;
        }
        previous = candidate;
    }
    previous
}

/// Whether `kind` can still evolve.
pub fn can_evolve(kind: PlayerKind) -> bool {
    next_kind(kind) != kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_walks_blob_to_mouse() {
        assert_eq!(next_kind(PlayerKind::Blob), PlayerKind::Walker);
        assert_eq!(next_kind(PlayerKind::Walker), PlayerKind::Mouse);
        assert_eq!(next_kind(PlayerKind::Mouse), PlayerKind::Mouse);
    }

    #[test]
    fn chain_walks_back_down() {
        assert_eq!(previous_kind(PlayerKind::Mouse), PlayerKind::Walker);
        assert_eq!(previous_kind(PlayerKind::Walker), PlayerKind::Blob);
        assert_eq!(previous_kind(PlayerKind::Blob), PlayerKind::Blob);
    }

    #[test]
    fn only_the_top_form_is_terminal() {
        assert!(can_evolve(PlayerKind::Blob));
        assert!(can_evolve(PlayerKind::Walker));
        assert!(!can_evolve(PlayerKind::Mouse));
    }
}
