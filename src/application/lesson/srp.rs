//! Single Responsibility: one type, one reason to change.

use tracing::debug;

use crate::domain::Principle;
use crate::port::{Lesson, Narrator};

use super::error::LessonError;

/// A user being registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// The violation: validation, storage, mail and logging in one type.
pub mod bad {
    use super::{LessonError, Narrator, User};

    /// Changes whenever the rules, the storage, the mail text or the log
    /// format change.
    #[derive(Debug, Default)]
    pub struct UserManager {
        users: Vec<User>,
    }

    impl UserManager {
        /// Validate, save, mail and log in one call.
        ///
        /// # Errors
        ///
        /// Returns [`LessonError::InvalidArgument`] for a missing name or
        /// email. Nothing inside the manager handles it.
        pub fn register(&mut self, user: User, out: &mut dyn Narrator) -> Result<(), LessonError> {
            if user.name.trim().is_empty() {
                return Err(LessonError::InvalidArgument("name is required".into()));
            }
            if !user.email.contains('@') {
                return Err(LessonError::InvalidArgument("a valid email is required".into()));
            }

            out.effect(&format!("INSERT INTO users VALUES ('{}', '{}')", user.name, user.email));
            out.effect(&format!("Sending welcome email to {}", user.email));
            out.effect(&format!("[log] registered {}", user.name));
            self.users.push(user);
            Ok(())
        }

        #[must_use]
        pub fn count(&self) -> usize {
            self.users.len()
        }
    }
}

/// The fix: one type per responsibility, composed by a service.
pub mod good {
    use super::{LessonError, Narrator, User};

    #[derive(Debug, Default, Clone, Copy)]
    pub struct UserValidator;

    impl UserValidator {
        /// # Errors
        ///
        /// Returns [`LessonError::InvalidArgument`] for a missing name or
        /// email.
        pub fn validate(&self, user: &User) -> Result<(), LessonError> {
            if user.name.trim().is_empty() {
                return Err(LessonError::InvalidArgument("name is required".into()));
            }
            if !user.email.contains('@') {
                return Err(LessonError::InvalidArgument("a valid email is required".into()));
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct UserRepository {
        users: Vec<User>,
    }

    impl UserRepository {
        pub fn save(&mut self, user: User, out: &mut dyn Narrator) {
            out.effect(&format!("Saved {} to the repository", user.name));
            self.users.push(user);
        }

        #[must_use]
        pub fn count(&self) -> usize {
            self.users.len()
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct WelcomeMailer;

    impl WelcomeMailer {
        pub fn send(&self, user: &User, out: &mut dyn Narrator) {
            out.effect(&format!("Welcome email sent to {}", user.email));
        }
    }

    /// Coordinates the three collaborators; owns no rule of its own.
    #[derive(Debug, Default)]
    pub struct UserService {
        validator: UserValidator,
        repository: UserRepository,
        mailer: WelcomeMailer,
    }

    impl UserService {
        /// # Errors
        ///
        /// Propagates validation failures to the caller.
        pub fn register(&mut self, user: User, out: &mut dyn Narrator) -> Result<(), LessonError> {
            self.validator.validate(&user)?;
            self.mailer.send(&user, out);
            self.repository.save(user, out);
            Ok(())
        }

        #[must_use]
        pub fn registered(&self) -> usize {
            self.repository.count()
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SingleResponsibilityLesson;

impl Lesson for SingleResponsibilityLesson {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    fn run(&self, out: &mut dyn Narrator) {
        out.section("Bad: UserManager does everything");
        out.explain("UserManager validates input, writes to the database, sends mail and logs.");
        let mut manager = bad::UserManager::default();
        if let Err(err) = manager.register(User::new("Ada", "ada@example.com"), out) {
            out.fault(&err.to_string());
        }
        out.explain("Registering a user without a name:");
        if let Err(err) = manager.register(User::new("", "nobody@example.com"), out) {
            debug!(error = %err, "validation error escaped UserManager");
            out.fault(&format!("unhandled: {err}"));
        }
        out.explain(
            "The error escapes with no recovery inside the manager, and any change to mail, \
             storage or logging means editing this one type.",
        );

        out.section("Good: one responsibility per type");
        out.explain("UserValidator, UserRepository and WelcomeMailer each do one job.");
        let mut service = good::UserService::default();
        for user in [
            User::new("Grace", "grace@example.com"),
            User::new("Linus", "not-an-email"),
        ] {
            let name = user.name.clone();
            match service.register(user, out) {
                Ok(()) => out.outcome("registered", &name),
                Err(err) => out.fault(&format!("rejected {name}: {err}")),
            }
        }
        out.outcome("users stored", &service.registered().to_string());
    }
}
