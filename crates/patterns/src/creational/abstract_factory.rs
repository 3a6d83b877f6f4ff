//! Abstract factory: one factory per platform, each producing matching widgets

use crate::error::PatternError;

/// Platform-styled button
pub trait Button {
    /// Describe how the button renders
    fn paint(&self) -> String;
}

/// Button in the Linux style
#[derive(Debug, Default)]
pub struct LinuxButton;

impl Button for LinuxButton {
    fn paint(&self) -> String {
        "Render a button in a Linux style".to_string()
    }
}

/// Button in the Windows style
#[derive(Debug, Default)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "Render a button in a Windows style".to_string()
    }
}

/// Button in the MacOS style
#[derive(Debug, Default)]
pub struct MacOsButton;

impl Button for MacOsButton {
    fn paint(&self) -> String {
        "Render a button in a MacOS style".to_string()
    }
}

/// Creates a family of widgets without naming their concrete types
pub trait GuiFactory {
    /// Button matching this factory's platform
    fn create_button(&self) -> Box<dyn Button>;
}

/// Factory for Linux widgets
#[derive(Debug, Default)]
pub struct LinuxFactory;

impl GuiFactory for LinuxFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }
}

/// Factory for Windows widgets
#[derive(Debug, Default)]
pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

/// Factory for MacOS widgets
#[derive(Debug, Default)]
pub struct MacOsFactory;

impl GuiFactory for MacOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }
}

/// Platforms with a widget family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
}

impl Platform {
    /// Platform this binary was compiled for (Linux for anything unlisted)
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Factory producing this platform's widgets
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Linux => Box::new(LinuxFactory),
            Platform::Windows => Box::new(WindowsFactory),
            Platform::MacOs => Box::new(MacOsFactory),
        }
    }
}

/// Paint a button from the Linux factory
pub fn demo() -> Result<Vec<String>, PatternError> {
    let button = LinuxFactory.create_button();
    Ok(vec![button.paint()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_match_platform() {
        assert_eq!(
            Platform::Windows.factory().create_button().paint(),
            "Render a button in a Windows style"
        );
        assert_eq!(
            Platform::MacOs.factory().create_button().paint(),
            "Render a button in a MacOS style"
        );
        assert_eq!(
            Platform::Linux.factory().create_button().paint(),
            "Render a button in a Linux style"
        );
    }

    #[test]
    fn test_current_platform_has_factory() {
        let painted = Platform::current().factory().create_button().paint();
        assert!(painted.starts_with("Render a button"));
    }
}
