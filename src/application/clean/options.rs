/// Which directories `clean` touches, and whether it only reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Leave `<resource root>/<artifact>` alone
    pub dist_only: bool,
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dist_only(self, dist_only: bool) -> Self {
        Self { dist_only, ..self }
    }

    pub fn with_dry_run(self, dry_run: bool) -> Self {
        Self { dry_run, ..self }
    }
}
