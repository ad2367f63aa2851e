use std::cell::Cell;

use crate::error::{BuildVerError, Result};
use crate::git::{DescribeRequest, SourceControl};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    describe: std::result::Result<String, String>,
    dirty: bool,
    calls: Cell<usize>,
}

impl MockRepository {
    /// Mock whose clean working tree describes as `describe`
    pub fn new(describe: impl Into<String>) -> Self {
        MockRepository {
            describe: Ok(describe.into()),
            dirty: false,
            calls: Cell::new(0),
        }
    }

    /// Mock whose describe query always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockRepository {
            describe: Err(message.into()),
            dirty: false,
            calls: Cell::new(0),
        }
    }

    /// Mark the working tree as having uncommitted modifications
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Number of describe queries served so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SourceControl for MockRepository {
    fn describe(&self, request: &DescribeRequest) -> Result<String> {
        self.calls.set(self.calls.get() + 1);

        let mut text = self
            .describe
            .clone()
            .map_err(BuildVerError::describe)?;
        if self.dirty && request.dirty {
            text.push_str(&request.dirty_suffix);
        }
        Ok(text)
    }
}
