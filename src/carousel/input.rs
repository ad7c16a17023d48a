// Keyboard input for carousels and the modal viewer.
//
// Keybindings:
// - Left / h: Previous item (modal item while the modal is open)
// - Right / l: Next item (modal item while the modal is open)
// - Enter: Open the modal at the current item
// - Escape / q: Close the modal

/// Keys a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Enter,
    Escape,
}

impl Key {
    /// Map a key name to a binding.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" | "h" => Some(Self::Left),
            "right" | "l" => Some(Self::Right),
            "enter" | "return" => Some(Self::Enter),
            "escape" | "esc" | "q" => Some(Self::Escape),
            _ => None,
        }
    }
}
