use rand::Rng;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;

pub trait PuzzleChar {
    /// True for the 26 letters a grid cell may hold.
    fn is_grid_letter(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_grid_letter(&self) -> bool {
        self.is_ascii_uppercase()
    }
}

/// Draw one letter uniformly from A-Z.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let offset = rng.random_range(0..ALPHABET_SIZE as u8);
    char::from(b'A' + offset)
}
