//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard input into controller-level `InputEvent`s.
//
// Architecture:
//   Winit PhysicalKey + ElementState → translate_key → InputEvent → InputBuffer
//
// Keys outside the `KeyCode` vocabulary are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::ElementState,
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== Event Processing ====================================================

/// Maps a physical key and its state to an `InputEvent`.
pub fn translate_key(physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let key = match physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => return None,
    };

    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to controller key codes.
///
/// Maps A-Z, arrows and the few special keys a platformer binds. Anything
/// else returns `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            ShiftLeft => KeyCode::LeftShift,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn press_and_release_map_to_edges() {
        assert_eq!(
            translate_key(PhysicalKey::Code(WinitKeyCode::KeyE), ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::KeyE))
        );
        assert_eq!(
            translate_key(PhysicalKey::Code(WinitKeyCode::Space), ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::Space))
        );
    }

    #[test]
    fn left_shift_is_mapped() {
        assert_eq!(KeyCode::from(WinitKeyCode::ShiftLeft), KeyCode::LeftShift);
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        assert_eq!(
            translate_key(PhysicalKey::Code(WinitKeyCode::F13), ElementState::Pressed),
            None
        );
        assert_eq!(
            translate_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }
}
