//! Seeding bonus by ranked position.

/// Bonus points for the team at a 0-based position in the ranked order.
pub fn bonus(index: usize) -> f64 {
    match index {
        0 => 500.0,
        1 => 400.0,
        2 => 300.0,
        3 => 250.0,
        4 | 5 => 200.0,
        6 | 7 => 150.0,
        8..=11 => 100.0,
        _ => 50.0,
    }
}
