use crossterm::style::{Color, Stylize, style};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A writer shared by the display, the dispensers and the session so their
/// output interleaves in the order it happened.
pub struct Terminal<W: Write> {
    out: Rc<RefCell<W>>,
    color: bool,
}

impl<W: Write> Clone for Terminal<W> {
    fn clone(&self) -> Self {
        Self {
            out: Rc::clone(&self.out),
            color: self.color,
        }
    }
}

impl<W: Write> Terminal<W> {
    /// With `color` off every line is written as plain text.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
            color,
        }
    }

    pub fn line(&self, text: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{text}")
    }

    pub fn colored_line(&self, text: &str, color: Color) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        if self.color {
            writeln!(out, "{}", style(text).with(color))
        } else {
            writeln!(out, "{text}")
        }
    }

    /// Writes without a newline and flushes, for prompts.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        write!(out, "{text}")?;
        out.flush()
    }
}

impl Terminal<Vec<u8>> {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }
}
