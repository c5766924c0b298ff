//=========================================================================
// Actions & Axes
//=========================================================================
//
// Gameplay-level input vocabulary.
//
// Actions: discrete buttons with press/hold/release semantics.
// Axes:    raw digital axes in [-1, 1] built from held keys.
//
//=========================================================================

//=== Action ==============================================================

/// Discrete gameplay command mapped from one or more keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a jump (edge) / keep rising at full height (held).
    Jump,

    /// Launch the orb when docked, recall it when active.
    ToggleOrb,
}

//=== Axis ================================================================

/// Raw movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

//=== AxisDirection =======================================================

/// Which end of an axis a key pushes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    Negative,
    Positive,
}

impl AxisDirection {
    /// Signed contribution of this direction.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
