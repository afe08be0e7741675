#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use jslox::session::{Outcome, Session};

/// Everything one run produced: how it ended, what the program printed and
/// the rendered diagnostics.
pub struct Run {
    pub outcome: Outcome,
    pub output: String,
    pub reports: Vec<String>,
}

/// A session whose program output lands in a shared buffer.
pub struct Harness {
    pub session: Session,
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Harness {
    pub fn new() -> Self {
        let buffer: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        let session = Session::with_output(buffer.clone());

        Self { session, buffer }
    }

    /// Run `source` and return only the output it added.
    pub fn run(&mut self, source: &str) -> Run {
        let seen_reports = self.session.diagnostics().error_count();
        self.buffer.borrow_mut().clear();

        let outcome = self.session.run(source);

        Run {
            outcome,
            output: String::from_utf8(self.buffer.borrow().clone()).expect("utf-8 output"),
            reports: self.session.diagnostics().reports()[seen_reports..].to_vec(),
        }
    }
}

pub fn run(source: &str) -> Run {
    Harness::new().run(source)
}
