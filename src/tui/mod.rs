//! Interactive password form.

mod app;
mod input;
mod slider;
mod view;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use crate::error::Result;
use crate::form::Form;
use crate::settings::Settings;
use crate::terminal::Screen;

use app::App;
use input::Flow;
use view::{Layout, TrackHandle};

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let track = TrackHandle::default();
    let mut app = App::new(Form::system(settings.generation_config()), track.clone());

    let mut screen = Screen::enter()?;
    let mut out = io::stdout();
    tracing::info!("form opened");

    loop {
        let (cols, rows) = terminal::size()?;
        let layout = Layout::new(cols, rows);
        track.set(Some(layout.track_bounds()));
        view::draw(&mut out, &mut app, &layout)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input::on_key(&mut app, key) == Flow::Quit {
                    break;
                }
            }
            Event::Mouse(mouse) => input::on_mouse(&mut app, &layout, mouse),
            _ => {}
        }
    }

    app.slider.end_drag();
    screen.leave();
    tracing::info!("form closed");
    Ok(())
}
