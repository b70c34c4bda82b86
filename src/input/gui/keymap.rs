use crate::controllers::command::Command;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keys listed in the overlay, paired with what they do.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("A / D", "pan left / right"),
    ("W / S", "pan up / down"),
    ("+ / -", "zoom in / out"),
    ("Up / Down", "Julia real part + / -"),
    ("Left / Right", "Julia imaginary part + / -"),
    ("1 / 2", "Mandelbrot / Julia"),
    ("Esc", "exit"),
];

#[must_use]
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::KeyA => Some(Command::PanLeft),
        KeyCode::KeyD => Some(Command::PanRight),
        KeyCode::KeyW => Some(Command::PanUp),
        KeyCode::KeyS => Some(Command::PanDown),
        KeyCode::NumpadAdd | KeyCode::Equal => Some(Command::ZoomIn),
        KeyCode::NumpadSubtract | KeyCode::Minus => Some(Command::ZoomOut),
        KeyCode::ArrowUp => Some(Command::RealUp),
        KeyCode::ArrowDown => Some(Command::RealDown),
        KeyCode::ArrowLeft => Some(Command::ImagUp),
        KeyCode::ArrowRight => Some(Command::ImagDown),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Command::SelectMandelbrot),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Command::SelectJulia),
        KeyCode::Escape => Some(Command::Exit),
        _ => None,
    }
}

/// Key-down events, auto-repeat included, that map to a command.
#[must_use]
pub fn command_for_event(event: &KeyEvent) -> Option<Command> {
    match (event.state, event.physical_key) {
        (ElementState::Pressed, PhysicalKey::Code(code)) => command_for_key(code),
        _ => None,
    }
}
