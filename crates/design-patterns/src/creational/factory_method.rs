//! # Factory Method Pattern
//!
//! Client không tự tạo shape mà nhờ `ShapeFactory` quyết định tạo loại nào.

use lessons_core::{Console, Lesson, LessonError, Result, Topic};
use std::str::FromStr;

pub trait Shape {
    fn name(&self) -> &'static str;

    fn draw(&self, console: &mut Console);
}

pub struct Circle;

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self, console: &mut Console) {
        console.say("Drawing a Circle");
    }
}

pub struct Square;

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn draw(&self, console: &mut Console) {
        console.say("Drawing a Square");
    }
}

/// Các loại shape factory biết tạo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    pub fn create(self) -> Box<dyn Shape> {
        match self {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            other => Err(LessonError::UnknownShape(other.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    /// Trả về `None` cho loại shape không biết
    pub fn get_shape(&self, shape_type: &str) -> Option<Box<dyn Shape>> {
        match shape_type.parse::<ShapeKind>() {
            Ok(kind) => Some(kind.create()),
            Err(e) => {
                log::debug!("ShapeFactory: {}", e);
                None
            }
        }
    }
}

pub struct FactoryMethodLesson;

impl Lesson for FactoryMethodLesson {
    fn id(&self) -> &'static str {
        "factory-method"
    }

    fn title(&self) -> &'static str {
        "Factory Method Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Creational
    }

    fn summary(&self) -> &'static str {
        "Let a factory decide which concrete type to instantiate"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let factory = ShapeFactory;
        let shapes = ["circle", "square"]
            .into_iter()
            .filter_map(|shape_type| factory.get_shape(shape_type));

        for shape in shapes {
            shape.draw(console);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shapes() {
        let factory = ShapeFactory;

        let circle = factory.get_shape("circle").unwrap();
        assert_eq!(circle.name(), "circle");
        let mut console = Console::capture();
        circle.draw(&mut console);
        assert_eq!(console.lines(), ["Drawing a Circle"]);

        let square = factory.get_shape("square").unwrap();
        assert_eq!(square.name(), "square");
    }

    #[test]
    fn test_unknown_shape_yields_nothing() {
        let factory = ShapeFactory;
        assert!(factory.get_shape("triangle").is_none());
        assert!(factory.get_shape("Circle").is_none());
    }

    #[test]
    fn test_shape_kind_parse() {
        assert_eq!("square".parse::<ShapeKind>().unwrap(), ShapeKind::Square);

        let err = "triangle".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown shape: triangle");
    }
}
