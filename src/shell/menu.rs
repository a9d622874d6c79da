//! Main menu entries.

/// An entry in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    /// Add, subtract, multiply, divide and modulo on two numbers
    Basic,
    /// Powers, roots, logarithms and factorial of one number
    Advanced,
    /// Sine, cosine and tangent of an angle in degrees
    Trigonometric,
    /// Fixed showcase computations
    Demo,
    /// Leave the shell
    Exit,
}

impl MenuItem {
    /// Entries in the order they are listed. Exit is shown last.
    pub const ALL: [MenuItem; 5] = [
        Self::Basic,
        Self::Advanced,
        Self::Trigonometric,
        Self::Demo,
        Self::Exit,
    ];

    /// Map a typed number to an entry.
    pub fn from_choice(choice: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.key() == choice)
    }

    /// Number the user types to pick this entry.
    pub fn key(&self) -> i64 {
        match self {
            Self::Basic => 1,
            Self::Advanced => 2,
            Self::Trigonometric => 3,
            Self::Demo => 4,
            Self::Exit => 0,
        }
    }

    /// Text shown next to the number in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Operations (Add, Subtract, Multiply, Divide)",
            Self::Advanced => "Advanced Operations (Power, Square Root, Factorial, etc.)",
            Self::Trigonometric => "Trigonometric Operations (Sin, Cos, Tan, etc.)",
            Self::Demo => "Run Demo Calculations",
            Self::Exit => "Exit",
        }
    }

    /// Heading printed when the section starts.
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Operations",
            Self::Advanced => "Advanced Operations",
            Self::Trigonometric => "Trigonometric Operations",
            Self::Demo => "Demo Calculations",
            Self::Exit => "Exit",
        }
    }
}
