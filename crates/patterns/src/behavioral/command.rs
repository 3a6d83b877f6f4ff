//! Command: a light switch invoker that keeps a history of executed commands

use crate::error::PatternError;
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Receiver
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn turn_on(&self) -> String {
        self.on.set(true);
        "The light is on".to_string()
    }

    pub fn turn_off(&self) -> String {
        self.on.set(false);
        "The light is off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

/// Encapsulated request against a receiver
pub trait Command: fmt::Debug {
    /// Short command name used in history listings
    fn name(&self) -> &'static str;

    /// Perform the request and describe what happened
    fn execute(&self) -> String;
}

#[derive(Debug)]
pub struct TurnOn {
    light: Rc<Light>,
}

impl TurnOn {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for TurnOn {
    fn name(&self) -> &'static str {
        "TurnOn"
    }

    fn execute(&self) -> String {
        self.light.turn_on()
    }
}

#[derive(Debug)]
pub struct TurnOff {
    light: Rc<Light>,
}

impl TurnOff {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for TurnOff {
    fn name(&self) -> &'static str {
        "TurnOff"
    }

    fn execute(&self) -> String {
        self.light.turn_off()
    }
}

/// Executed command with its execution time
#[derive(Debug)]
pub struct HistoryEntry {
    pub command: Box<dyn Command>,
    pub executed_at: DateTime<Utc>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.command.name(), self.executed_at.format("%H:%M:%S%.3f"))
    }
}

/// Invoker. History is kept most recent first.
#[derive(Debug, Default)]
pub struct Switch {
    history: VecDeque<HistoryEntry>,
}

impl Switch {
    /// Execute `command` and record it
    pub fn execute(&mut self, command: Box<dyn Command>) -> String {
        debug!(command = command.name(), "Executing command");
        let output = command.execute();
        self.history.push_front(HistoryEntry {
            command,
            executed_at: Utc::now(),
        });
        output
    }

    /// Executed commands, most recent first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }
}

/// Client wiring the lamp to the switch and translating user tokens
#[derive(Debug, Default)]
pub struct LightSwitchClient {
    lamp: Rc<Light>,
    switch: Switch,
}

impl LightSwitchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press the switch with `ON` or `OFF` (case and padding ignored).
    ///
    /// Any other token is rejected and leaves the history untouched.
    pub fn press(&mut self, token: &str) -> Result<String, PatternError> {
        let token = token.trim();
        match token.to_ascii_uppercase().as_str() {
            "ON" => Ok(self.switch.execute(Box::new(TurnOn::new(Rc::clone(&self.lamp))))),
            "OFF" => Ok(self.switch.execute(Box::new(TurnOff::new(Rc::clone(&self.lamp))))),
            _ => {
                warn!(token, "Rejected switch command");
                Err(PatternError::RejectedCommand(token.to_string()))
            }
        }
    }

    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    pub fn lamp(&self) -> &Light {
        &self.lamp
    }
}

/// Press the switch with each token, then list the history
pub fn run(tokens: &[&str]) -> Vec<String> {
    let mut client = LightSwitchClient::new();
    let mut lines: Vec<String> = tokens
        .iter()
        .map(|token| client.press(token).unwrap_or_else(|err| err.to_string()))
        .collect();

    lines.push("Command history:".to_string());
    lines.extend(client.switch().history().map(ToString::to_string));
    lines
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok(run(&["ON", "OFF", "****"]))
}
