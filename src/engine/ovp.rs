/// OVP (Optimal Viewing Position) anchor calculation.
///
/// The anchor shifts right as words get longer:
/// - 0-1 chars → position 0
/// - 2-5 chars → position 1
/// - 6-9 chars → position 2
/// - 10-13 chars → position 3
/// - 14+ chars → position 4 (cap, keeps focus away from the tail of long words)
///
/// Length is counted in characters, not bytes.
pub fn calculate_anchor_position(word: &str) -> usize {
    let len = word.chars().count();
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}
