//! Interactive form state: the form, its slider, and keyboard focus.

use crate::clipboard::Clipboard;
use crate::form::{Form, LENGTH_MAX, LENGTH_MIN};
use crate::pass::{CharacterClass, Classify, Draw};

use super::slider::SliderController;
use super::view::TrackHandle;

/// Checkbox display order.
pub const TOGGLES: [CharacterClass; 4] = [
    CharacterClass::Uppercase,
    CharacterClass::Lowercase,
    CharacterClass::Digits,
    CharacterClass::Symbols,
];

/// Terminal cells covered by the thumb.
pub const THUMB_CELLS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Toggle(CharacterClass),
    Generate,
    Copy,
}

const FOCUS_ORDER: [Focus; 7] = [
    Focus::Length,
    Focus::Toggle(TOGGLES[0]),
    Focus::Toggle(TOGGLES[1]),
    Focus::Toggle(TOGGLES[2]),
    Focus::Toggle(TOGGLES[3]),
    Focus::Generate,
    Focus::Copy,
];

pub struct App<D, C, B> {
    pub form: Form<D, C, B>,
    pub slider: SliderController<TrackHandle>,
    pub focus: Focus,
    pub status: Option<&'static str>,
}

impl<D: Draw, C: Classify, B: Clipboard> App<D, C, B> {
    pub fn new(form: Form<D, C, B>, track: TrackHandle) -> Self {
        let length = form.config().length() as u32;
        let slider = SliderController::new(
            LENGTH_MIN as u32,
            LENGTH_MAX as u32,
            length,
            THUMB_CELLS,
            track,
        );
        Self {
            form,
            slider,
            focus: Focus::Length,
            status: None,
        }
    }

    pub fn length(&self) -> u32 {
        self.form.config().length() as u32
    }

    /// Store a length and push it back down to the slider.
    pub fn set_length(&mut self, value: u32) {
        self.form.set_length(value);
        self.slider.set_value(self.length());
    }

    pub fn step_length(&mut self, delta: i32) {
        let next = (self.length() as i32 + delta).clamp(LENGTH_MIN as i32, LENGTH_MAX as i32);
        self.set_length(next as u32);
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let enabled = self.form.config().classes.contains(class);
        self.form.toggle_class(class, !enabled);
    }

    /// Disabled while no class is on; pressing it then does nothing.
    pub fn generate(&mut self) {
        self.form.submit();
    }

    /// The confirmation only shows when a clipboard is actually attached.
    pub fn copy(&mut self) {
        if self.form.copy() && self.form.clipboard().is_available() {
            self.status = Some("Copied to clipboard");
        }
    }

    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.shift_focus(FOCUS_ORDER.len() - 1);
    }

    fn shift_focus(&mut self, by: usize) {
        let at = FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = FOCUS_ORDER[(at + by) % FOCUS_ORDER.len()];
    }

    /// Space/Enter on the focused control.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Length => {}
            Focus::Toggle(class) => self.toggle(class),
            Focus::Generate => self.generate(),
            Focus::Copy => self.copy(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::SystemClipboard;
    use crate::clipboard::testing::Recorder;
    use crate::form::GenerationConfig;
    use crate::pass::{Sampler, Zxcvbn};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    pub type TestApp = App<Sampler<StdRng>, Zxcvbn, Recorder>;

    pub fn app(track: TrackHandle) -> TestApp {
        let form = Form::new(
            GenerationConfig::default(),
            Sampler::new(StdRng::seed_from_u64(3)),
            Zxcvbn,
            Recorder::default(),
        );
        App::new(form, track)
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = app(TrackHandle::default());
        assert_eq!(app.focus, Focus::Length);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Copy);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus, Focus::Toggle(CharacterClass::Uppercase));
    }

    #[test]
    fn test_step_length_stays_in_range() {
        let mut app = app(TrackHandle::default());
        app.step_length(-1);
        assert_eq!(app.length(), 1);
        app.step_length(30);
        assert_eq!(app.length(), 21);
        assert_eq!(app.slider.value(), 21);
    }

    #[test]
    fn test_generate_without_classes_is_silent() {
        let mut app = app(TrackHandle::default());
        app.generate();
        assert!(app.status.is_none());
        assert!(app.form.password().is_none());

        app.focus = Focus::Toggle(CharacterClass::Digits);
        app.activate();
        app.generate();
        assert!(app.status.is_none());
        assert!(app.form.password().is_some());
    }

    #[test]
    fn test_copy_only_after_generate() {
        let mut app = app(TrackHandle::default());
        app.copy();
        assert!(app.status.is_none());

        app.toggle(CharacterClass::Lowercase);
        app.generate();
        app.copy();
        assert_eq!(app.status, Some("Copied to clipboard"));
        assert_eq!(app.form.clipboard().0.borrow().len(), 1);
    }

    #[test]
    fn test_copy_without_clipboard_shows_nothing() {
        let form = Form::new(
            GenerationConfig::default(),
            Sampler::new(StdRng::seed_from_u64(3)),
            Zxcvbn,
            SystemClipboard::disabled(),
        );
        let mut app = App::new(form, TrackHandle::default());
        app.toggle(CharacterClass::Digits);
        app.generate();
        app.copy();

        assert!(app.form.password().is_some());
        assert!(app.status.is_none());
    }
}
