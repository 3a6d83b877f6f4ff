//! Bridge: a shape abstraction drawing through an interchangeable backend

use crate::error::PatternError;

/// Implementor side of the bridge
pub trait DrawingApi {
    fn draw_square(&self) -> String;
}

#[derive(Debug, Default)]
pub struct RasterApi;

impl DrawingApi for RasterApi {
    fn draw_square(&self) -> String {
        "draw squareA".to_string()
    }
}

#[derive(Debug, Default)]
pub struct VectorApi;

impl DrawingApi for VectorApi {
    fn draw_square(&self) -> String {
        "draw squareB".to_string()
    }
}

/// Abstraction side; varies independently of the backend it holds
pub struct CircleShape {
    api: Box<dyn DrawingApi>,
}

impl CircleShape {
    pub fn new(api: Box<dyn DrawingApi>) -> Self {
        Self { api }
    }

    pub fn draw(&self) -> String {
        self.api.draw_square()
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok(vec![
        CircleShape::new(Box::new(RasterApi)).draw(),
        CircleShape::new(Box::new(VectorApi)).draw(),
    ])
}
