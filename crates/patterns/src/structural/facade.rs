//! Facade: one entry point driving several subsystems

use crate::error::PatternError;

#[derive(Debug, Default)]
pub struct Header;

impl Header {
    pub fn draw(&self) -> String {
        "draw header".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Body;

impl Body {
    pub fn draw(&self) -> String {
        "draw body".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Footer;

impl Footer {
    pub fn draw(&self) -> String {
        "draw footer".to_string()
    }
}

/// Single entry point over the page subsystems; each facade owns its own set
#[derive(Debug, Default)]
pub struct Facade {
    header: Header,
    body: Body,
    footer: Footer,
}

impl Facade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw header, body and footer in that order
    pub fn draw(&self) -> Vec<String> {
        vec![self.header.draw(), self.body.draw(), self.footer.draw()]
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok(Facade::new().draw())
}
