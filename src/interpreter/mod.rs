//! Python interpreter discovery.
//!
//! Two questions are answered here:
//!
//! - which Python version the machine runs ([`RuntimeVersion::detect`]),
//!   which decides the version-specific prep commands
//! - which command actually starts that Python ([`locate`]), probed from an
//!   ordered list of [`CandidateTemplate`]s
//!
//! # Example
//!
//! ```
//! use bootstrap::interpreter::{first_interpreter, CandidateTemplate, RuntimeVersion};
//! use bootstrap::shell::MockRunner;
//! use bootstrap::ui::MockUI;
//!
//! let runner = MockRunner::new();
//! runner.fail("python3.12 --version", "not found");
//! let mut ui = MockUI::new();
//!
//! let templates = vec![
//!     CandidateTemplate::parse("python{major}.{minor}").unwrap(),
//!     CandidateTemplate::parse("python{major}").unwrap(),
//! ];
//! let chosen = first_interpreter(&templates, RuntimeVersion::new(3, 12), &runner, &mut ui);
//! assert_eq!(chosen.unwrap(), "python3");
//! ```

pub mod locator;
pub mod template;
pub mod version;

pub use locator::{first_interpreter, locate};
pub use template::CandidateTemplate;
pub use version::{RuntimeVersion, REFERENCE_COMMANDS};
