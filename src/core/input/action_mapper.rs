//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps held/pressed keys to gameplay actions and raw axis values.
//
// Architecture:
//   key → HashMap → Action                 (buttons)
//   key → HashMap → (Axis, AxisDirection)  (axes)
//
// Button and axis tables are independent, so one key (W) can both jump
// and push the vertical axis.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, Axis, AxisDirection},
    event::KeyCode,
    state_tracker::StateTracker,
};

//=== ActionMapper ========================================================

/// Resolves tracker state into actions and axis values.
#[derive(Debug, Default)]
pub struct ActionMapper {
    /// Button bindings: key → action
    action_bindings: HashMap<KeyCode, Action>,

    /// Axis bindings: key → (axis, direction)
    axis_bindings: HashMap<KeyCode, (Axis, AxisDirection)>,
}

impl ActionMapper {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper with the classic keyboard layout.
    ///
    /// - Horizontal: A/D, ←/→
    /// - Vertical: S/W, ↓/↑
    /// - Jump: W, Space
    /// - Toggle orb: E
    pub fn with_default_bindings() -> Self {
        let mut mapper = Self::new();

        mapper.bind_axis(KeyCode::KeyA, Axis::Horizontal, AxisDirection::Negative);
        mapper.bind_axis(KeyCode::ArrowLeft, Axis::Horizontal, AxisDirection::Negative);
        mapper.bind_axis(KeyCode::KeyD, Axis::Horizontal, AxisDirection::Positive);
        mapper.bind_axis(KeyCode::ArrowRight, Axis::Horizontal, AxisDirection::Positive);

        mapper.bind_axis(KeyCode::KeyS, Axis::Vertical, AxisDirection::Negative);
        mapper.bind_axis(KeyCode::ArrowDown, Axis::Vertical, AxisDirection::Negative);
        mapper.bind_axis(KeyCode::KeyW, Axis::Vertical, AxisDirection::Positive);
        mapper.bind_axis(KeyCode::ArrowUp, Axis::Vertical, AxisDirection::Positive);

        mapper.bind_action(KeyCode::KeyW, Action::Jump);
        mapper.bind_action(KeyCode::Space, Action::Jump);
        mapper.bind_action(KeyCode::KeyE, Action::ToggleOrb);

        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a button action, replacing any previous action on that key.
    pub fn bind_action(&mut self, key: KeyCode, action: Action) {
        self.action_bindings.insert(key, action);
    }

    /// Binds a key to one end of an axis.
    pub fn bind_axis(&mut self, key: KeyCode, axis: Axis, direction: AxisDirection) {
        self.axis_bindings.insert(key, (axis, direction));
    }

    /// Removes both the action and the axis binding of a key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.action_bindings.remove(&key);
        self.axis_bindings.remove(&key);
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.action_bindings.clear();
        self.axis_bindings.clear();
    }

    //--- Resolution -------------------------------------------------------

    /// Returns the action bound to a key.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.action_bindings.get(&key).copied()
    }

    /// `true` if any key bound to `action` went down this frame.
    pub fn action_pressed(&self, tracker: &StateTracker, action: Action) -> bool {
        self.keys_for(action).any(|key| tracker.is_key_pressed(key))
    }

    /// `true` while any key bound to `action` is held.
    pub fn action_held(&self, tracker: &StateTracker, action: Action) -> bool {
        self.keys_for(action).any(|key| tracker.is_key_down(key))
    }

    /// Raw axis value from held keys.
    ///
    /// Each held direction contributes at most once, so opposing keys
    /// cancel to zero and two keys on the same side still read as ±1.
    pub fn axis_value(&self, tracker: &StateTracker, axis: Axis) -> f32 {
        let mut negative = false;
        let mut positive = false;

        for (&key, &(bound_axis, direction)) in &self.axis_bindings {
            if bound_axis != axis || !tracker.is_key_down(key) {
                continue;
            }
            match direction {
                AxisDirection::Negative => negative = true,
                AxisDirection::Positive => positive = true,
            }
        }

        let mut value = 0.0;
        if negative {
            value += AxisDirection::Negative.sign();
        }
        if positive {
            value += AxisDirection::Positive.sign();
        }
        value
    }

    fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.action_bindings
            .iter()
            .filter(move |&(_, &bound)| bound == action)
            .map(|(&key, _)| key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
