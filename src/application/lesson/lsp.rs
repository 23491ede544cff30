//! Liskov Substitution: a square is not a resizable rectangle.

use crate::domain::Principle;
use crate::port::{Lesson, Narrator};

/// The violation: `Square` honours the trait's signatures but not its
/// contract that width and height change independently.
pub mod bad {
    pub trait Resizable {
        fn set_width(&mut self, width: u32);
        fn set_height(&mut self, height: u32);
        fn area(&self) -> u32;
    }

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Rectangle {
        width: u32,
        height: u32,
    }

    impl Resizable for Rectangle {
        fn set_width(&mut self, width: u32) {
            self.width = width;
        }

        fn set_height(&mut self, height: u32) {
            self.height = height;
        }

        fn area(&self) -> u32 {
            self.width * self.height
        }
    }

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Square {
        side: u32,
    }

    impl Resizable for Square {
        fn set_width(&mut self, width: u32) {
            self.side = width;
        }

        fn set_height(&mut self, height: u32) {
            self.side = height;
        }

        fn area(&self) -> u32 {
            self.side * self.side
        }
    }

    /// Client code written against the trait: sets 5x4 and returns the area.
    pub fn stretch(shape: &mut dyn Resizable) -> u32 {
        shape.set_width(5);
        shape.set_height(4);
        shape.area()
    }
}

/// The fix: an abstraction every implementation can honour.
pub mod good {
    pub trait Shape {
        fn name(&self) -> &'static str;
        fn area(&self) -> u32;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rectangle {
        pub width: u32,
        pub height: u32,
    }

    impl Shape for Rectangle {
        fn name(&self) -> &'static str {
            "rectangle"
        }

        fn area(&self) -> u32 {
            self.width * self.height
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Square {
        pub side: u32,
    }

    impl Shape for Square {
        fn name(&self) -> &'static str {
            "square"
        }

        fn area(&self) -> u32 {
            self.side * self.side
        }
    }

    /// Sum of areas; correct for any `Shape`.
    #[must_use]
    pub fn total_area(shapes: &[Box<dyn Shape>]) -> u32 {
        shapes.iter().map(|shape| shape.area()).sum()
    }
}

const EXPECTED_AREA: u32 = 20;

#[derive(Debug, Default, Clone, Copy)]
pub struct LiskovSubstitutionLesson;

impl Lesson for LiskovSubstitutionLesson {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    fn run(&self, out: &mut dyn Narrator) {
        out.section("Bad: Square implements Resizable");
        out.explain("stretch() sets width 5 and height 4, then expects an area of 20.");
        let mut shapes: [(&str, Box<dyn bad::Resizable>); 2] = [
            ("rectangle", Box::new(bad::Rectangle::default())),
            ("square", Box::new(bad::Square::default())),
        ];
        for (name, shape) in &mut shapes {
            let area = bad::stretch(shape.as_mut());
            if area == EXPECTED_AREA {
                out.outcome(&format!("{name} area"), &area.to_string());
            } else {
                out.fault(&format!("{name} area is {area}, expected {EXPECTED_AREA}"));
            }
        }
        out.explain("Substituting a Square broke code that was correct for Rectangle.");

        out.section("Good: independent shapes behind Shape");
        let shapes: Vec<Box<dyn good::Shape>> = vec![
            Box::new(good::Rectangle {
                width: 5,
                height: 4,
            }),
            Box::new(good::Square { side: 4 }),
        ];
        for shape in &shapes {
            out.outcome(&format!("{} area", shape.name()), &shape.area().to_string());
        }
        out.outcome("total area", &good::total_area(&shapes).to_string());
        out.explain("Shape promises only what every implementation can deliver.");
    }
}
