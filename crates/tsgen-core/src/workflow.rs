//! Scaffolding workflow
//!
//! A run is a fixed, ordered list of [`Step`]s executed one after another
//! against an explicit [`WorkingDirectory`]. Each step belongs to a coarse
//! [`Stage`]; stage transitions are logged. The first failing step ends the
//! run and nothing already written is rolled back.

use crate::config::ScaffoldConfig;
use crate::deps;
use crate::entrypoint::{EntrypointRenderer, ENTRYPOINT_FILE};
use crate::error::Result;
use crate::manifest::{self, PACKAGE_JSON};
use crate::process::{CommandRunner, Invocation};
use crate::prompt::{collect_parameters, InputSource};
use crate::tsconfig::{merge_compiler_config, TSCONFIG_FILE};
use crate::types::ProjectParameters;
use crate::vcs::{self, GITIGNORE, GITIGNORE_FILE};
use crate::watcher::{WatcherConfig, NODEMON_FILE};
use crate::workdir::WorkingDirectory;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tracing::{debug, info};

/// Coarse progress state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingParams,
    Bootstrapping,
    ConfiguringCompiler,
    Installing,
    WritingEntrypoint,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CollectingParams => "collecting parameters",
            Self::Bootstrapping => "bootstrapping",
            Self::ConfiguringCompiler => "configuring compiler",
            Self::Installing => "installing",
            Self::WritingEntrypoint => "writing entrypoint",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One unit of work after the project directory exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    InitManifest,
    MergeCompilerConfig,
    InjectScripts,
    InitRepository,
    InstallDependencies,
    WriteWatcherConfig,
    WriteEntrypoint,
}

impl Step {
    /// Execution order
    pub const ALL: [Step; 7] = [
        Step::InitManifest,
        Step::MergeCompilerConfig,
        Step::InjectScripts,
        Step::InitRepository,
        Step::InstallDependencies,
        Step::WriteWatcherConfig,
        Step::WriteEntrypoint,
    ];

    pub fn stage(self) -> Stage {
        match self {
            Step::InitManifest => Stage::Bootstrapping,
            Step::MergeCompilerConfig | Step::InjectScripts => Stage::ConfiguringCompiler,
            Step::InitRepository | Step::InstallDependencies => Stage::Installing,
            Step::WriteWatcherConfig | Step::WriteEntrypoint => Stage::WritingEntrypoint,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::InitManifest => "Initializing package manifest",
            Step::MergeCompilerConfig => "Writing compiler config",
            Step::InjectScripts => "Adding run scripts",
            Step::InitRepository => "Initializing git repository",
            Step::InstallDependencies => "Installing dependencies",
            Step::WriteWatcherConfig => "Writing watcher config",
            Step::WriteEntrypoint => "Generating server entrypoint",
        }
    }
}

/// What a completed run produced
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    /// Project root
    pub root: Utf8PathBuf,
    /// Files written, in order
    pub files: Vec<Utf8PathBuf>,
    /// External commands executed, in order
    pub commands: Vec<String>,
    /// Recoverable problems that were worked around, for the caller to report
    pub warnings: Vec<String>,
}

/// Runs the scaffolding steps
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    runner: &'a dyn CommandRunner,
    renderer: EntrypointRenderer,
}

impl<'a> Scaffolder<'a> {
    pub fn new(config: &'a ScaffoldConfig, runner: &'a dyn CommandRunner) -> Result<Self> {
        Ok(Self {
            config,
            runner,
            renderer: EntrypointRenderer::new()?,
        })
    }

    /// Ask the scaffolding questions through `input`
    pub fn collect(&self, input: &mut dyn InputSource) -> Result<ProjectParameters> {
        info!("Stage: {}", Stage::CollectingParams);
        collect_parameters(input)
    }

    /// Prompt for parameters, then scaffold under `parent`
    pub async fn run(
        &self,
        input: &mut dyn InputSource,
        parent: &Utf8Path,
    ) -> Result<ScaffoldReport> {
        let params = self.collect(input)?;
        self.scaffold(&params, parent).await
    }

    /// Create `<parent>/<name>` and run every step in it
    pub async fn scaffold(
        &self,
        params: &ProjectParameters,
        parent: &Utf8Path,
    ) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        match self.execute(params, parent, &mut report).await {
            Ok(()) => {
                info!("Stage: {}", Stage::Done);
                Ok(report)
            }
            Err(e) => {
                info!("Stage: {}", Stage::Failed);
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        params: &ProjectParameters,
        parent: &Utf8Path,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let mut stage = Stage::Bootstrapping;
        info!("Stage: {}", stage);

        let workdir = WorkingDirectory::create(parent, &params.name)?;
        report.root = workdir.root().to_path_buf();

        for step in Step::ALL {
            if step.stage() != stage {
                stage = step.stage();
                info!("Stage: {}", stage);
            }
            info!("{}...", step.description());
            self.run_step(step, params, &workdir, report).await?;
        }

        Ok(())
    }

    async fn run_step(
        &self,
        step: Step,
        params: &ProjectParameters,
        workdir: &WorkingDirectory,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        match step {
            Step::InitManifest => {
                let init = manifest::init_invocation(params.init_mode, self.config);
                self.invoke(&init, workdir, report).await?;
                let module_type = manifest::module_type_invocation(self.config);
                self.invoke(&module_type, workdir, report).await?;
            }
            Step::MergeCompilerConfig => {
                if self.config.compiler_init {
                    let tsc_init = Invocation::new(
                        &self.config.tools.package_runner,
                        ["--yes", "tsc", "--init"],
                    )
                    .silent(self.config.silent.compiler_init);
                    self.invoke(&tsc_init, workdir, report).await?;
                }

                let existing = match workdir.read_optional(TSCONFIG_FILE) {
                    Ok(text) => text,
                    Err(e) => {
                        debug!("Could not read {}, using defaults: {}", TSCONFIG_FILE, e);
                        report
                            .warnings
                            .push(format!("Could not read {}: {}", TSCONFIG_FILE, e));
                        None
                    }
                };
                let merged = merge_compiler_config(existing.as_deref());
                if let Some(reason) = merged.fallback_reason {
                    debug!(
                        "Existing {} is invalid, using defaults: {}",
                        TSCONFIG_FILE, reason
                    );
                    report
                        .warnings
                        .push(format!("Ignored invalid {}: {}", TSCONFIG_FILE, reason));
                }
                report
                    .files
                    .push(workdir.write_json(TSCONFIG_FILE, &merged.config)?);
            }
            Step::InjectScripts => {
                let text = workdir.read_optional(PACKAGE_JSON).unwrap_or_else(|e| {
                    debug!("Could not read {}: {}", PACKAGE_JSON, e);
                    None
                });
                let mut document = manifest::load_manifest(text.as_deref());
                manifest::inject_scripts(&mut document);
                report.files.push(workdir.write_json(PACKAGE_JSON, &document)?);
            }
            Step::InitRepository => {
                self.invoke(&vcs::init_invocation(self.config), workdir, report)
                    .await?;
                report.files.push(workdir.write(GITIGNORE_FILE, GITIGNORE)?);
            }
            Step::InstallDependencies => {
                for install in deps::install_invocations(self.config) {
                    self.invoke(&install, workdir, report).await?;
                }
            }
            Step::WriteWatcherConfig => {
                report
                    .files
                    .push(workdir.write_json(NODEMON_FILE, &WatcherConfig::default())?);
            }
            Step::WriteEntrypoint => {
                let source = self.renderer.render(params.port)?;
                report.files.push(workdir.write(ENTRYPOINT_FILE, &source)?);
            }
        }
        Ok(())
    }

    async fn invoke(
        &self,
        invocation: &Invocation,
        workdir: &WorkingDirectory,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        self.runner.run(invocation, workdir.root()).await?;
        report.commands.push(invocation.command_line());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_follow_stage_order() {
        let stages: Vec<Stage> = Step::ALL.iter().map(|s| s.stage()).collect();
        let order = [
            Stage::Bootstrapping,
            Stage::ConfiguringCompiler,
            Stage::Installing,
            Stage::WritingEntrypoint,
        ];
        let positions: Vec<usize> = stages
            .iter()
            .map(|stage| order.iter().position(|o| o == stage).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_install_precedes_generated_sources() {
        let index = |step| Step::ALL.iter().position(|s| *s == step).unwrap();
        assert!(index(Step::InstallDependencies) < index(Step::WriteWatcherConfig));
        assert!(index(Step::InstallDependencies) < index(Step::WriteEntrypoint));
        assert!(index(Step::InitManifest) < index(Step::InjectScripts));
    }
}
