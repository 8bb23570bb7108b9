use std::path::PathBuf;

/// Where finished curves go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write each curve under the output directory.
    #[default]
    Save,
    /// Print each curve to stdout.
    Display,
}

/// Settings for one invocation, threaded explicitly through every dataset run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output: OutputMode,
    pub verbose: bool,
    /// Fixed shuffle seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Dataset names to run; empty runs all of them.
    pub datasets: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("graphs"),
            output: OutputMode::Save,
            verbose: false,
            seed: None,
            datasets: Vec::new(),
        }
    }
}

impl RunConfig {
    pub fn should_run(&self, name: &str) -> bool {
        self.datasets.is_empty() || self.datasets.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_runs_everything() {
        let config = RunConfig::default();
        assert!(config.should_run("cmc"));
        assert!(config.should_run("income"));
    }

    #[test]
    fn selection_filters_datasets() {
        let config = RunConfig {
            datasets: vec!["mushroom".to_string()],
            ..Default::default()
        };
        assert!(config.should_run("mushroom"));
        assert!(!config.should_run("cmc"));
    }
}
