//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressStyle};

/// A stage of a single-assistant install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    LoadingTemplates,
    GeneratingSkillFiles,
    InstallingReferences,
    InstallingScripts,
    InstallingData,
}

impl InstallStep {
    pub const ALL: [InstallStep; 5] = [
        InstallStep::LoadingTemplates,
        InstallStep::GeneratingSkillFiles,
        InstallStep::InstallingReferences,
        InstallStep::InstallingScripts,
        InstallStep::InstallingData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InstallStep::LoadingTemplates => "Loading templates",
            InstallStep::GeneratingSkillFiles => "Generating skill files",
            InstallStep::InstallingReferences => "Installing references",
            InstallStep::InstallingScripts => "Installing scripts",
            InstallStep::InstallingData => "Installing data files",
        }
    }

    /// Share of the bar this step accounts for (weights sum to 100)
    fn weight(self) -> u64 {
        match self {
            InstallStep::LoadingTemplates | InstallStep::InstallingReferences => 20,
            InstallStep::GeneratingSkillFiles => 30,
            InstallStep::InstallingScripts | InstallStep::InstallingData => 15,
        }
    }

    /// Bar position when this step starts
    fn offset(self) -> u64 {
        InstallStep::ALL
            .iter()
            .take_while(|s| **s != self)
            .map(|s| s.weight())
            .sum()
    }
}

/// Receives install progress notifications
pub trait ProgressReporter {
    /// A stage of the current install is starting
    fn step(&self, step: InstallStep);

    /// One assistant of a bulk install has been processed
    fn platform_done(&self, _assistant_id: &str) {}
}

/// Reporter that ignores all notifications
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn step(&self, _step: InstallStep) {}
}

/// Progress display for installations
pub struct ProgressDisplay {
    bar: ProgressBar,
    /// Bulk installs count assistants instead of weighted steps
    bulk: bool,
}

impl ProgressDisplay {
    /// Progress bar for a single-assistant install
    pub fn for_steps() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{bar:30.cyan/blue} {percent:>3}% | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░");

        let bar = ProgressBar::new(100);
        bar.set_style(style);
        bar.set_message(InstallStep::LoadingTemplates.label());

        Self { bar, bulk: false }
    }

    /// Progress bar for installing into every assistant
    pub fn for_platforms(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);

        Self { bar, bulk: true }
    }

    /// Complete the bar
    pub fn finish(&self) {
        if !self.bulk {
            self.bar.set_position(100);
        }
        self.bar.finish_with_message("Complete!");
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl ProgressReporter for ProgressDisplay {
    fn step(&self, step: InstallStep) {
        if self.bulk {
            return;
        }
        self.bar.set_position(step.offset());
        self.bar.set_message(step.label());
    }

    fn platform_done(&self, assistant_id: &str) {
        if self.bulk {
            self.bar.set_message(assistant_id.to_string());
            self.bar.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_weights_sum_to_100() {
        let total: u64 = InstallStep::ALL.iter().map(|s| s.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_step_offsets() {
        assert_eq!(InstallStep::LoadingTemplates.offset(), 0);
        assert_eq!(InstallStep::GeneratingSkillFiles.offset(), 20);
        assert_eq!(InstallStep::InstallingData.offset(), 85);
    }

    #[test]
    fn test_hidden_display_accepts_updates() {
        let display = ProgressDisplay::for_steps();
        display.bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        for step in InstallStep::ALL {
            display.step(step);
        }
        display.finish();
        assert_eq!(display.bar.position(), 100);
    }
}
