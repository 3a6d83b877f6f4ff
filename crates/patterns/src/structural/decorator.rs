//! Decorator: wrap a widget to add behaviour around every call

use crate::error::PatternError;

/// Something that can be drawn and resized
pub trait Widget {
    /// Lines produced by drawing
    fn draw(&self) -> Vec<String>;

    /// Lines produced by resizing
    fn resize(&self) -> Vec<String>;
}

/// Undecorated base widget
#[derive(Debug, Default)]
pub struct TextField;

impl Widget for TextField {
    fn draw(&self) -> Vec<String> {
        vec!["draw text field".to_string()]
    }

    fn resize(&self) -> Vec<String> {
        vec!["resize text field".to_string()]
    }
}

/// Adds a border after the wrapped widget
#[derive(Debug)]
pub struct Bordered<W> {
    inner: W,
}

impl<W: Widget> Bordered<W> {
    /// Wrap `inner`
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Widget> Widget for Bordered<W> {
    fn draw(&self) -> Vec<String> {
        let mut lines = self.inner.draw();
        lines.push("with border".to_string());
        lines
    }

    fn resize(&self) -> Vec<String> {
        let mut lines = self.inner.resize();
        lines.push("with border".to_string());
        lines
    }
}

/// Adds a scrollbar after the wrapped widget
#[derive(Debug)]
pub struct Scrollable<W> {
    inner: W,
}

impl<W: Widget> Scrollable<W> {
    /// Wrap `inner`
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Widget> Widget for Scrollable<W> {
    fn draw(&self) -> Vec<String> {
        let mut lines = self.inner.draw();
        lines.push("with scrollbar".to_string());
        lines
    }

    fn resize(&self) -> Vec<String> {
        let mut lines = self.inner.resize();
        lines.push("with scrollbar".to_string());
        lines
    }
}

/// Draw and resize a text field wrapped in a border and a scrollbar
pub fn demo() -> Result<Vec<String>, PatternError> {
    let widget = Scrollable::new(Bordered::new(TextField));
    let mut lines = widget.draw();
    lines.extend(widget.resize());
    Ok(lines)
}
