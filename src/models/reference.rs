//! References discovered during the graph walk

/// A pending reference to another file in the package.
///
/// `exact` references already name a file path (entry files and
/// `/// <reference path>` targets); inexact ones are module specifiers that
/// still need resolving.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub text: String,
    pub exact: bool,
}

impl Reference {
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exact: true,
        }
    }

    pub fn inexact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exact: false,
        }
    }
}
