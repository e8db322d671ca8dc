use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Pick a secret word that hasn't been used yet.
///
/// Repeated entries in `words` count once. Once every word of the category
/// has been used the whole list is back in play. Returns `None` only for an
/// empty word list.
pub fn select_word(words: &[String], used_words: &[String]) -> Option<String> {
    let used: HashSet<&str> = used_words.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let distinct: Vec<&String> = words.iter().filter(|&w| seen.insert(w)).collect();
    let available: Vec<&String> = distinct
        .iter()
        .copied()
        .filter(|w| !used.contains(w.as_str()))
        .collect();

    let pool = if available.is_empty() {
        if !distinct.is_empty() {
            tracing::debug!(words = distinct.len(), "All words used, wrapping around");
        }
        distinct
    } else {
        available
    };
    pool.choose(&mut rand::rng()).map(|w| (*w).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_never_returns_used_word() {
        let all = words(&["Musa", "Isa", "Nuh", "Yusuf"]);
        let used = words(&["Musa", "Nuh"]);

        for _ in 0..50 {
            let word = select_word(&all, &used).unwrap();
            assert!(word == "Isa" || word == "Yusuf");
        }
    }

    #[test]
    fn test_single_remaining_word() {
        let all = words(&["Musa", "Isa", "Nuh"]);
        let used = words(&["Musa", "Nuh", "Sulaiman"]);
        assert_eq!(select_word(&all, &used).as_deref(), Some("Isa"));
    }

    #[test]
    fn test_wraps_around_when_exhausted() {
        let all = words(&["Musa", "Isa"]);
        let used = words(&["Isa", "Musa"]);
        let mut seen = HashSet::new();

        for _ in 0..50 {
            let word = select_word(&all, &used).unwrap();
            assert!(all.contains(&word));
            seen.insert(word);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_all_available_words_reachable() {
        let all = words(&["a", "b", "c"]);
        let mut seen = HashSet::new();
        for _ in 0..80 {
            seen.insert(select_word(&all, &[]).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_repeated_words_count_once() {
        let all = words(&["x", "x", "x", "y"]);
        let x_count = (0..4000)
            .filter(|_| select_word(&all, &[]).as_deref() == Some("x"))
            .count();
        assert!((1600..=2400).contains(&x_count), "x: {}", x_count);

        // Same on wraparound
        let used = words(&["y", "x"]);
        let x_count = (0..4000)
            .filter(|_| select_word(&all, &used).as_deref() == Some("x"))
            .count();
        assert!((1600..=2400).contains(&x_count), "x: {}", x_count);
    }

    #[test]
    fn test_empty_word_list() {
        assert_eq!(select_word(&[], &words(&["a"])), None);
    }
}
