use crate::controllers::command::Command;
use crate::core::fractals::variant::FractalKind;
use crate::core::view::view_state::ViewState;

pub const DEFAULT_MOVE_STEP: f64 = 0.01;
pub const DEFAULT_ZOOM_STEP: f64 = 0.0001;
pub const DEFAULT_PARAM_STEP: f64 = 0.001;

/// What the frame loop should do after a command has been applied.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit,
}

/// Applies commands to a [`ViewState`].
///
/// Every command is defined for every state. Julia adjustments under
/// Mandelbrot leave the view untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputController {
    move_step: f64,
    zoom_step: f64,
    param_step: f64,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_STEP, DEFAULT_ZOOM_STEP, DEFAULT_PARAM_STEP)
    }
}

impl InputController {
    #[must_use]
    pub fn new(move_step: f64, zoom_step: f64, param_step: f64) -> Self {
        Self {
            move_step,
            zoom_step,
            param_step,
        }
    }

    #[must_use]
    pub fn move_step(&self) -> f64 {
        self.move_step
    }

    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    #[must_use]
    pub fn param_step(&self) -> f64 {
        self.param_step
    }

    pub fn apply(&self, view: &mut ViewState, command: Command) -> Transition {
        let applied = match command {
            Command::PanLeft => view.pan(-self.move_step, 0.0),
            Command::PanRight => view.pan(self.move_step, 0.0),
            Command::PanUp => view.pan(0.0, -self.move_step),
            Command::PanDown => view.pan(0.0, self.move_step),
            Command::ZoomIn => view.adjust_zoom(-self.zoom_step),
            Command::ZoomOut => view.adjust_zoom(self.zoom_step),
            Command::RealUp => view.adjust_julia_constant(self.param_step, 0.0),
            Command::RealDown => view.adjust_julia_constant(-self.param_step, 0.0),
            Command::ImagUp => view.adjust_julia_constant(0.0, self.param_step),
            Command::ImagDown => view.adjust_julia_constant(0.0, -self.param_step),
            Command::SelectMandelbrot => view.select(FractalKind::Mandelbrot),
            Command::SelectJulia => view.select(FractalKind::Julia),
            Command::Exit => {
                log::debug!("applied {command}");
                return Transition::Exit;
            }
        };

        if applied {
            log::debug!(
                "applied {command}: offset {}, zoom delta {}, {:?}",
                view.offset(),
                view.zoom_delta(),
                view.variant()
            );
        } else {
            log::trace!("ignored {command} under {}", view.kind());
        }

        Transition::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::variant::FractalVariant;

    fn julia_view() -> ViewState {
        ViewState::new(0.001, FractalKind::Julia, Complex::ZERO)
    }

    #[test]
    fn test_pan_commands_move_offset_by_step() {
        let controller = InputController::new(0.5, 0.0, 0.0);
        let mut view = ViewState::default();

        let _ = controller.apply(&mut view, Command::PanRight);
        assert_eq!(view.offset(), Complex::new(0.5, 0.0));

        let _ = controller.apply(&mut view, Command::PanDown);
        assert_eq!(view.offset(), Complex::new(0.5, 0.5));

        let _ = controller.apply(&mut view, Command::PanLeft);
        let _ = controller.apply(&mut view, Command::PanUp);
        assert_eq!(view.offset(), Complex::ZERO);
    }

    #[test]
    fn test_zoom_in_shrinks_zoom_delta() {
        let controller = InputController::new(0.0, 0.25, 0.0);
        let mut view = ViewState::new(1.0, FractalKind::Mandelbrot, Complex::ZERO);

        let _ = controller.apply(&mut view, Command::ZoomIn);
        assert_eq!(view.zoom_delta(), 0.75);

        let _ = controller.apply(&mut view, Command::ZoomOut);
        let _ = controller.apply(&mut view, Command::ZoomOut);
        assert_eq!(view.zoom_delta(), 1.25);
    }

    #[test]
    fn test_julia_commands_adjust_constant() {
        let controller = InputController::new(0.0, 0.0, 0.25);
        let mut view = julia_view();

        let _ = controller.apply(&mut view, Command::RealUp);
        let _ = controller.apply(&mut view, Command::ImagDown);
        assert_eq!(view.variant().julia_constant(), Some(Complex::new(0.25, -0.25)));

        let _ = controller.apply(&mut view, Command::RealDown);
        let _ = controller.apply(&mut view, Command::ImagUp);
        assert_eq!(view.variant().julia_constant(), Some(Complex::ZERO));
    }

    #[test]
    fn test_julia_commands_are_no_ops_under_mandelbrot() {
        let controller = InputController::default();
        let mut view = ViewState::default();
        let before = view;

        for command in [
            Command::RealUp,
            Command::RealDown,
            Command::ImagUp,
            Command::ImagDown,
        ] {
            assert_eq!(controller.apply(&mut view, command), Transition::Continue);
        }

        assert_eq!(view, before);
    }

    #[test]
    fn test_select_switches_variant() {
        let controller = InputController::default();
        let mut view = ViewState::default();

        let _ = controller.apply(&mut view, Command::SelectJulia);
        assert_eq!(view.variant(), FractalVariant::Julia { c: Complex::ZERO });

        let _ = controller.apply(&mut view, Command::SelectMandelbrot);
        assert_eq!(view.variant(), FractalVariant::Mandelbrot);
    }

    #[test]
    fn test_exit_signals_without_touching_view() {
        let controller = InputController::default();
        let mut view = julia_view();
        let before = view;

        assert_eq!(controller.apply(&mut view, Command::Exit), Transition::Exit);
        assert_eq!(view, before);
    }

    #[test]
    fn test_every_other_command_continues() {
        let controller = InputController::default();
        let mut view = ViewState::default();

        for &command in Command::ALL.iter().filter(|&&c| c != Command::Exit) {
            assert_eq!(controller.apply(&mut view, command), Transition::Continue);
        }
    }

    #[test]
    fn test_default_steps() {
        let controller = InputController::default();

        assert_eq!(controller.move_step(), 0.01);
        assert_eq!(controller.zoom_step(), 0.0001);
        assert_eq!(controller.param_step(), 0.001);
    }
}
