//=========================================================================
// Platform Adapter
//
// Glue between a Winit event loop owned by the host and the `Runner`
// thread.
//
// Architecture:
// ```text
//  Host (main thread)                  Runner thread
//  WindowEvent::KeyboardInput
//        ↓ push_key
//  InputBuffer ── flush on redraw ──►  EventCollector → InputSystem → Simulation
//              ── shutdown on close ─►
// ```
//
// The window and event loop stay with the host; this module only speaks
// Winit key types.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== Public API ==========================================================

pub use input_buffer::InputBuffer;
pub use input_processor::translate_key;
