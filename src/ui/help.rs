use crate::models::screen::Screen;

/// Static welcome screen shown until the start key is pressed.
pub fn instructions() -> Screen {
    let mut s = Screen::new();
    s.put_bold(2, 2, "Welcome to the System Info Utility!");
    s.put(4, 4, "Instructions:");
    s.put(6, 6, "Press '.' to start the utility.");
    s.put(7, 6, "Within the utility:");
    s.put(9, 8, ":   Refresh the displayed information");
    s.put(10, 8, "q   Exit the utility");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_mention_every_key() {
        let s = instructions();
        assert!(s.contains("Press '.' to start"));
        assert!(s.contains(":   Refresh"));
        assert!(s.contains("q   Exit"));
        assert_eq!(s.to_lines().len(), 11);
    }
}
