//! Form layout, hit testing and drawing.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::clipboard::Clipboard;
use crate::pass::{CharacterClass, Classify, Draw};
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, INNER_WIDTH, RESET, REVERSE, YELLOW, box_bottom, box_line,
    box_line_center, box_rule, box_split, box_top, styled,
};

use super::app::{App, Focus, THUMB_CELLS, TOGGLES};
use super::slider::{Bounds, Container};

const TITLE: &str = "Password Generator";
const PLACEHOLDER: &str = "P4$5W0rD!";
const COPY_LABEL: &str = "[copy]";
const GENERATE_LABEL: &str = "[ GENERATE → ]";
const HINT: &str = "tab focus · space toggle · ←/→ length · g generate · c copy · q quit";

// Rows relative to the box top.
const ROW_PASSWORD: u16 = 1;
const ROW_TRACK: u16 = 5;
const ROW_TOGGLES: u16 = 7;
const ROW_GENERATE: u16 = 14;
const ROW_STATUS: u16 = 17;

/// Slider container geometry shared between the renderer and the slider.
#[derive(Debug, Clone, Default)]
pub struct TrackHandle(Rc<Cell<Option<Bounds>>>);

impl TrackHandle {
    pub fn set(&self, bounds: Option<Bounds>) {
        self.0.set(bounds);
    }
}

impl Container for TrackHandle {
    fn bounds(&self) -> Option<Bounds> {
        self.0.get()
    }
}

/// What a mouse press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Thumb,
    Track,
    Toggle(CharacterClass),
    Copy,
    Generate,
}

/// Screen placement of the form for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub left: u16,
    pub top: u16,
}

impl Layout {
    /// Center the box horizontally in a `cols` x `rows` terminal.
    pub fn new(cols: u16, rows: u16) -> Self {
        let left = cols.saturating_sub(BOX_WIDTH as u16) / 2;
        let top = if rows > ROW_STATUS + 2 { 1 } else { 0 };
        Self { left, top }
    }

    fn content_left(&self) -> u16 {
        self.left + 2
    }

    fn row(&self, offset: u16) -> u16 {
        self.top + offset
    }

    /// The slider container, in cells.
    pub fn track_bounds(&self) -> Bounds {
        Bounds {
            left: self.content_left() as f64,
            width: INNER_WIDTH as f64,
        }
    }

    /// Container rows are the track plus one row of padding on each side.
    pub fn in_container(&self, col: u16, row: u16) -> bool {
        let left = self.content_left();
        let cols = left..left + INNER_WIDTH as u16;
        let rows = self.row(ROW_TRACK - 1)..=self.row(ROW_TRACK + 1);
        cols.contains(&col) && rows.contains(&row)
    }

    /// Cell holding the thumb centre for a slider position.
    pub fn thumb_cell(&self, position: f64) -> u16 {
        let offset = (position - THUMB_CELLS / 2.0).max(0.0) as u16;
        self.content_left() + offset.min(INNER_WIDTH as u16 - 1)
    }

    pub fn hit(&self, col: u16, row: u16, thumb: u16) -> Option<Hit> {
        let left = self.content_left();
        let right = left + INNER_WIDTH as u16;
        if !(left..right).contains(&col) {
            return None;
        }

        if row == self.row(ROW_TRACK) {
            return Some(if col == thumb { Hit::Thumb } else { Hit::Track });
        }
        if row == self.row(ROW_PASSWORD) && col >= right - COPY_LABEL.len() as u16 {
            return Some(Hit::Copy);
        }
        if row == self.row(ROW_GENERATE) {
            return Some(Hit::Generate);
        }
        let first = self.row(ROW_TOGGLES);
        if (first..first + TOGGLES.len() as u16).contains(&row) {
            return Some(Hit::Toggle(TOGGLES[(row - first) as usize]));
        }
        None
    }
}

/// Pointer x for a mouse column: the centre of the cell.
pub fn pointer_x(col: u16) -> f64 {
    col as f64 + 0.5
}

/// Render the form into lines, top to bottom.
pub fn render<D, C, B>(app: &mut App<D, C, B>) -> Vec<String>
where
    D: Draw,
    C: Classify,
    B: Clipboard,
{
    let focus = app.focus;
    let position = app.slider.position();
    let length = app.length();
    let config = *app.form.config();
    let can_submit = app.form.can_submit();
    let can_copy = app.form.can_copy();

    let mut lines = Vec::with_capacity(ROW_STATUS as usize + 1);
    lines.push(box_top(TITLE));

    let shown = match app.form.password() {
        Some(password) => styled(password.value(), BOLD, true),
        None => styled(PLACEHOLDER, DIM, true),
    };
    let copy = styled(COPY_LABEL, if can_copy { GREEN } else { DIM }, true);
    lines.push(box_split(&shown, &styled_focus(&copy, focus == Focus::Copy)));
    lines.push(box_rule());

    let label = styled_focus("Character Length", focus == Focus::Length);
    lines.push(box_split(&label, &styled(&length.to_string(), GREEN, true)));
    lines.push(box_line(""));
    lines.push(box_line(&track(position)));
    lines.push(box_line(""));

    for class in TOGGLES {
        let mark = if config.classes.contains(class) { "[x]" } else { "[ ]" };
        let text = format!("{mark} {}", class.title());
        lines.push(box_line(&styled_focus(&text, focus == Focus::Toggle(class))));
    }
    lines.push(box_rule());

    let strength = app.form.strength();
    let meter: String = match strength {
        Some(s) => s
            .segments()
            .iter()
            .map(|on| if *on { format!("{YELLOW}█{RESET}") } else { "░".to_string() })
            .collect(),
        None => "░".repeat(4),
    };
    let label = strength
        .map(|s| s.label.to_uppercase())
        .unwrap_or_default();
    lines.push(box_split("STRENGTH", &format!("{label} {meter}")));
    lines.push(box_rule());

    let button = styled(GENERATE_LABEL, if can_submit { GREEN } else { DIM }, true);
    lines.push(box_line_center(&styled_focus(&button, focus == Focus::Generate)));
    lines.push(box_bottom());

    lines.push(format!("{DIM}{HINT}{RESET}"));
    lines.push(app.status.unwrap_or("").to_string());
    lines
}

fn styled_focus(text: &str, focused: bool) -> String {
    styled(text, REVERSE, focused)
}

/// Slider track: filled section, thumb, remainder.
fn track(position: f64) -> String {
    let width = INNER_WIDTH;
    let thumb = ((position - THUMB_CELLS / 2.0).max(0.0) as usize).min(width - 1);
    format!(
        "{GREEN}{}{BOLD}●{RESET}{DIM}{}{RESET}",
        "━".repeat(thumb),
        "─".repeat(width - thumb - 1)
    )
}

/// Draw one frame at `layout`.
pub fn draw<W, D, C, B>(out: &mut W, app: &mut App<D, C, B>, layout: &Layout) -> io::Result<()>
where
    W: Write,
    D: Draw,
    C: Classify,
    B: Clipboard,
{
    queue!(out, Clear(ClearType::All))?;
    for (i, line) in render(app).iter().enumerate() {
        queue!(out, MoveTo(layout.left, layout.top + i as u16), Print(line))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console_width;
    use crate::tui::app::tests::app;
    use pretty_assertions::assert_eq;

    const ROW_STRENGTH: usize = 12;

    fn placed() -> (Layout, TrackHandle) {
        let layout = Layout::new(80, 24);
        let track = TrackHandle::default();
        track.set(Some(layout.track_bounds()));
        (layout, track)
    }

    #[test]
    fn test_layout_centers_box() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout, Layout { left: 16, top: 1 });
        assert_eq!(Layout::new(20, 10), Layout { left: 0, top: 0 });
    }

    #[test]
    fn test_render_rows_line_up_with_hit_rows() {
        let (layout, track) = placed();
        let mut app = app(track);
        let lines = render(&mut app);

        assert!(lines[ROW_TRACK as usize].contains('●'));
        assert!(lines[ROW_PASSWORD as usize].contains(PLACEHOLDER));
        assert!(lines[ROW_GENERATE as usize].contains(GENERATE_LABEL));
        assert!(lines[ROW_STRENGTH].contains("STRENGTH"));
        for (i, class) in TOGGLES.iter().enumerate() {
            assert!(lines[ROW_TOGGLES as usize + i].contains(class.title()));
        }
        for line in &lines[..=ROW_GENERATE as usize + 1] {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
        assert_eq!(layout.top + ROW_TRACK, 6);
    }

    #[test]
    fn test_thumb_cell_spans_track() {
        let (layout, track) = placed();
        let mut app = app(track);
        let left = layout.track_bounds().left as u16;

        assert_eq!(layout.thumb_cell(app.slider.position()), left);
        app.set_length(21);
        assert_eq!(
            layout.thumb_cell(app.slider.position()),
            left + INNER_WIDTH as u16 - 1
        );
    }

    #[test]
    fn test_hit_regions() {
        let (layout, _) = placed();
        let left = layout.left + 2;
        let thumb = left + 5;

        assert_eq!(layout.hit(thumb, 6, thumb), Some(Hit::Thumb));
        assert_eq!(layout.hit(left, 6, thumb), Some(Hit::Track));
        assert_eq!(layout.hit(left, 8, thumb), Some(Hit::Toggle(CharacterClass::Uppercase)));
        assert_eq!(layout.hit(left, 11, thumb), Some(Hit::Toggle(CharacterClass::Symbols)));
        assert_eq!(layout.hit(left + 43, 2, thumb), Some(Hit::Copy));
        assert_eq!(layout.hit(left, 2, thumb), None);
        assert_eq!(layout.hit(left, 15, thumb), Some(Hit::Generate));
        assert_eq!(layout.hit(layout.left, 6, thumb), None);
    }

    #[test]
    fn test_container_includes_padding_rows() {
        let (layout, _) = placed();
        let left = layout.left + 2;
        assert!(layout.in_container(left, 5));
        assert!(layout.in_container(left, 7));
        assert!(!layout.in_container(left, 8));
        assert!(!layout.in_container(left - 1, 6));
    }

    #[test]
    fn test_strength_row_after_generate() {
        let (_, track) = placed();
        let mut app = app(track);
        app.toggle(CharacterClass::Lowercase);
        app.generate();

        let lines = render(&mut app);
        let label = app.form.strength().unwrap().label.to_uppercase();
        assert!(lines[ROW_STRENGTH].contains(&label));
        let password = app.form.password().unwrap().value().to_string();
        assert!(lines[ROW_PASSWORD as usize].contains(&password));
    }

    #[test]
    fn test_draw_writes_frame() {
        let (layout, track) = placed();
        let mut app = app(track);
        let mut buf = Vec::new();
        draw(&mut buf, &mut app, &layout).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(TITLE));
    }
}
