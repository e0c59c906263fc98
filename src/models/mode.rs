//! Reporting mode selected on the command line.

/// Which side of the found/not-found split gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-f`: candidates inside at least one reference subnet.
    ReportFound,
    /// `-nf`: candidates outside every reference subnet.
    ReportNotFound,
}

impl Mode {
    pub fn should_report(&self, found: bool) -> bool {
        match self {
            Mode::ReportFound => found,
            Mode::ReportNotFound => !found,
        }
    }
}
