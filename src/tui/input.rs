//! Keyboard and mouse handling for the form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::clipboard::Clipboard;
use crate::pass::{Classify, Draw};

use super::app::{App, Focus};
use super::view::{Hit, Layout, pointer_x};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn on_key<D, C, B>(app: &mut App<D, C, B>, key: KeyEvent) -> Flow
where
    D: Draw,
    C: Classify,
    B: Clipboard,
{
    app.status = None;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left | KeyCode::Char('-') if app.focus == Focus::Length => app.step_length(-1),
        KeyCode::Right | KeyCode::Char('+') if app.focus == Focus::Length => app.step_length(1),
        KeyCode::Home if app.focus == Focus::Length => app.set_length(app.slider.min()),
        KeyCode::End if app.focus == Focus::Length => app.set_length(app.slider.max()),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate(),
        KeyCode::Char('g') => app.generate(),
        KeyCode::Char('c') => app.copy(),
        _ => {}
    }
    Flow::Continue
}

pub fn on_mouse<D, C, B>(app: &mut App<D, C, B>, layout: &Layout, mouse: MouseEvent)
where
    D: Draw,
    C: Classify,
    B: Clipboard,
{
    let (col, row) = (mouse.column, mouse.row);
    let x = pointer_x(col);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status = None;
            let thumb = layout.thumb_cell(app.slider.position());
            match layout.hit(col, row, thumb) {
                Some(Hit::Thumb) => {
                    app.focus = Focus::Length;
                    app.slider.press_thumb();
                }
                Some(Hit::Track) => {
                    app.focus = Focus::Length;
                    if let Some(value) = app.slider.click_track(x) {
                        app.set_length(u32::try_from(value).unwrap_or(0));
                    }
                }
                Some(Hit::Toggle(class)) => {
                    app.focus = Focus::Toggle(class);
                    app.toggle(class);
                }
                Some(Hit::Copy) => app.copy(),
                Some(Hit::Generate) => app.generate(),
                None => {}
            }
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved
            if app.slider.is_dragging() =>
        {
            if !layout.in_container(col, row) {
                app.slider.leave();
            } else if let Some(value) = app.slider.pointer_move(x) {
                app.set_length(value);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.slider.release();
        }
        _ => {}
    }
}
