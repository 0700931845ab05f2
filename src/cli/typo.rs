use edit_distance::edit_distance;

/// The closest known name to `unknown`, if any is close enough to be a
/// plausible typo (within half the input's length, rounded up).
pub fn suggest<'a, I: Iterator<Item = &'a str>>(unknown: &str, candidates: I) -> Option<&'a str> {
    let max_distance = (unknown.chars().count() + 1) / 2;

    candidates
        .map(|c| (c, edit_distance(unknown, c)))
        .filter(|&(_, d)| d <= max_distance)
        .min_by_key(|&(_, d)| d)
        .map(|(c, _)| c)
}

#[test]
fn test_suggest_picks_the_closest_candidate() {
    let keys = ["author", "title", "year"];
    assert_eq!(suggest("autor", keys.iter().cloned()), Some("author"));
    assert_eq!(suggest("titel", keys.iter().cloned()), Some("title"));
}

#[test]
fn test_suggest_rejects_distant_candidates() {
    let keys = ["author", "title"];
    assert_eq!(suggest("zzzzzz", keys.iter().cloned()), None);
    assert_eq!(suggest("x", std::iter::empty()), None);
}
