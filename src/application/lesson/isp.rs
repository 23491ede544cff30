//! Interface Segregation: capabilities as narrow traits.

use crate::domain::Principle;
use crate::port::{Lesson, Narrator};

use super::error::LessonError;
use bad::Worker;
use good::{Coder, Restable};

/// The violation: one fat trait forces every worker to answer every call.
pub mod bad {
    use super::{LessonError, Narrator};

    pub trait Worker {
        fn name(&self) -> &'static str;
        fn work(&self, out: &mut dyn Narrator) -> Result<(), LessonError>;
        fn eat(&self, out: &mut dyn Narrator) -> Result<(), LessonError>;
        fn rest(&self, out: &mut dyn Narrator) -> Result<(), LessonError>;
        fn write_code(&self, out: &mut dyn Narrator) -> Result<(), LessonError>;
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Developer;

    impl Worker for Developer {
        fn name(&self) -> &'static str {
            "developer"
        }

        fn work(&self, out: &mut dyn Narrator) -> Result<(), LessonError> {
            out.effect("developer is working");
            Ok(())
        }

        fn eat(&self, out: &mut dyn Narrator) -> Result<(), LessonError> {
            out.effect("developer is eating lunch");
            Ok(())
        }

        fn rest(&self, out: &mut dyn Narrator) -> Result<(), LessonError> {
            out.effect("developer is resting");
            Ok(())
        }

        fn write_code(&self, out: &mut dyn Narrator) -> Result<(), LessonError> {
            out.effect("developer is writing code");
            Ok(())
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Robot;

    impl Worker for Robot {
        fn name(&self) -> &'static str {
            "robot"
        }

        fn work(&self, out: &mut dyn Narrator) -> Result<(), LessonError> {
            out.effect("robot is assembling parts");
            Ok(())
        }

        fn eat(&self, _out: &mut dyn Narrator) -> Result<(), LessonError> {
            Err(LessonError::Unsupported {
                subject: "robot",
                action: "eat",
            })
        }

        fn rest(&self, _out: &mut dyn Narrator) -> Result<(), LessonError> {
            Err(LessonError::Unsupported {
                subject: "robot",
                action: "rest",
            })
        }

        fn write_code(&self, _out: &mut dyn Narrator) -> Result<(), LessonError> {
            Err(LessonError::Unsupported {
                subject: "robot",
                action: "write code",
            })
        }
    }
}

/// The fix: each capability is its own trait; types opt in.
pub mod good {
    use super::Narrator;

    pub trait Workable {
        fn work(&self, out: &mut dyn Narrator);
    }

    pub trait Feedable {
        fn eat(&self, out: &mut dyn Narrator);
    }

    pub trait Restable {
        fn rest(&self, out: &mut dyn Narrator);
    }

    pub trait Coder {
        fn write_code(&self, out: &mut dyn Narrator);
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Human;

    impl Workable for Human {
        fn work(&self, out: &mut dyn Narrator) {
            out.effect("human is working");
        }
    }

    impl Feedable for Human {
        fn eat(&self, out: &mut dyn Narrator) {
            out.effect("human is eating lunch");
        }
    }

    impl Restable for Human {
        fn rest(&self, out: &mut dyn Narrator) {
            out.effect("human is resting");
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Developer;

    impl Workable for Developer {
        fn work(&self, out: &mut dyn Narrator) {
            out.effect("developer is working");
        }
    }

    impl Feedable for Developer {
        fn eat(&self, out: &mut dyn Narrator) {
            out.effect("developer is eating lunch");
        }
    }

    impl Restable for Developer {
        fn rest(&self, out: &mut dyn Narrator) {
            out.effect("developer is resting");
        }
    }

    impl Coder for Developer {
        fn write_code(&self, out: &mut dyn Narrator) {
            out.effect("developer is writing code");
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Robot;

    impl Workable for Robot {
        fn work(&self, out: &mut dyn Narrator) {
            out.effect("robot is assembling parts");
        }
    }

    /// Runs a shift for anything that can work; nothing else is required.
    pub fn shift(workers: &[&dyn Workable], out: &mut dyn Narrator) {
        for worker in workers {
            worker.work(out);
        }
    }

    /// Lunch break for those who eat.
    pub fn lunch(diners: &[&dyn Feedable], out: &mut dyn Narrator) {
        for diner in diners {
            diner.eat(out);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InterfaceSegregationLesson;

impl Lesson for InterfaceSegregationLesson {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn run(&self, out: &mut dyn Narrator) {
        out.section("Bad: one fat Worker trait");
        out.explain("Worker bundles work, eat, rest and write_code. Robot must implement all four.");
        let workers: [&dyn Worker; 2] = [&bad::Developer, &bad::Robot];
        for worker in workers {
            let results = [
                worker.work(out),
                worker.eat(out),
                worker.rest(out),
                worker.write_code(out),
            ];
            for err in results.into_iter().filter_map(Result::err) {
                out.fault(&format!("{}: {err}", worker.name()));
            }
        }
        out.explain("Robot exposes methods it can only fail at; callers find out at runtime.");

        out.section("Good: Workable, Feedable, Restable, Coder");
        out.explain("Each type implements only the capabilities it has.");
        let human = good::Human;
        let developer = good::Developer;
        let robot = good::Robot;
        good::shift(&[&human, &developer, &robot], out);
        good::lunch(&[&human, &developer], out);
        human.rest(out);
        developer.write_code(out);
        out.explain("Asking the robot to eat no longer compiles: good::Robot has no eat method.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NullNarrator;

    #[test]
    fn test_bad_robot_fails_unsupported_calls() {
        let robot = bad::Robot;
        assert!(robot.work(&mut NullNarrator).is_ok());
        assert_eq!(
            robot.eat(&mut NullNarrator),
            Err(LessonError::Unsupported {
                subject: "robot",
                action: "eat",
            })
        );
        assert!(robot.rest(&mut NullNarrator).is_err());
        assert!(robot.write_code(&mut NullNarrator).is_err());
    }

    #[test]
    fn test_bad_developer_supports_everything() {
        let developer = bad::Developer;
        assert!(developer.eat(&mut NullNarrator).is_ok());
        assert!(developer.write_code(&mut NullNarrator).is_ok());
    }

    #[test]
    fn test_unsupported_message() {
        let err = LessonError::Unsupported {
            subject: "robot",
            action: "rest",
        };
        assert_eq!(err.to_string(), "robot cannot rest");
    }
}
