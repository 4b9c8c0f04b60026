//! Deploy Use Case
//!
//! Orchestrates one artifact's deploy:
//! 1. Run the build tool (`dotnet publish ... --no-build`)
//! 2. Check the build output and metadata file exist
//! 3. Replace `dist/<artifact>` with the build output plus the metadata file
//! 4. Replace `<resource root>/<artifact>` with the staged tree
//!
//! No directory is touched until steps 1 and 2 succeed.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::Artifact;
use crate::domain::ports::{
    BuildRequest, BuildRunner, DeployEvent, DeployEventSink, FileSystem, NoopEventSink,
};
use crate::domain::value_objects::{DeployLayout, ExcludePatterns};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::replace::replace_dir;
use super::result::DeployReport;

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<FS, BR>
where
    FS: FileSystem,
    BR: BuildRunner,
{
    file_system: FS,
    build_runner: BR,
}

impl<FS, BR> DeployUseCase<FS, BR>
where
    FS: FileSystem,
    BR: BuildRunner,
{
    pub fn new(file_system: FS, build_runner: BR) -> Self {
        Self {
            file_system,
            build_runner,
        }
    }

    /// Deploy one artifact without progress events
    pub fn execute(&self, artifact: &Artifact, options: &DeployOptions) -> DeployResult<DeployReport> {
        self.execute_with_events(artifact, options, Arc::new(NoopEventSink))
    }

    /// Deploy one artifact, reporting each step to `event_sink`
    pub fn execute_with_events(
        &self,
        artifact: &Artifact,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        let layout = DeployLayout::resolve(
            artifact,
            &options.repo_root,
            &options.dist_dir,
            Some(&options.resource_root),
            &options.configuration,
        );
        let Some(deployed_dir) = layout.deployed_dir.clone() else {
            return Err(DeployError::SourceNotFound {
                path: options.resource_root.clone(),
            });
        };

        event_sink.on_event(DeployEvent::Started {
            artifact: layout.name.clone(),
            dist_dir: layout.dist_dir.clone(),
            deployed_dir: deployed_dir.clone(),
            dry_run: options.dry_run,
        });

        let built = self.build(&layout, options, &event_sink)?;
        self.check_sources(&layout)?;

        let mut report = DeployReport {
            artifact: layout.name.clone(),
            dist_dir: layout.dist_dir.clone(),
            deployed_dir: deployed_dir.clone(),
            built,
            staged_files: 0,
            deployed_files: 0,
            replaced_existing: self.file_system.exists(&deployed_dir),
            dry_run: options.dry_run,
        };

        if options.dry_run {
            report.staged_files = self
                .file_system
                .count_files(&layout.build_output_dir, &options.exclude)?;
            report.deployed_files = report.staged_files
                + usize::from(!self.build_output_has_metadata(&layout, &options.exclude));
        } else {
            report.staged_files = self.stage(&layout, options, &event_sink)?;
            report.deployed_files = self.publish(&layout, &deployed_dir, options, &event_sink)?;
        }

        event_sink.on_event(DeployEvent::Completed {
            artifact: layout.name.clone(),
            files: report.deployed_files,
            dry_run: options.dry_run,
        });

        Ok(report)
    }

    /// Run the build tool unless skipped. Returns whether it ran.
    fn build(
        &self,
        layout: &DeployLayout,
        options: &DeployOptions,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> DeployResult<bool> {
        if options.skip_build || options.dry_run {
            event_sink.on_event(DeployEvent::BuildSkipped {
                artifact: layout.name.clone(),
            });
            return Ok(false);
        }

        let request = BuildRequest {
            tool: options.tool.clone(),
            verb: options.verb.clone(),
            project_file: layout.project_file.clone(),
            configuration: options.configuration.clone(),
            no_build: options.no_build,
        };

        event_sink.on_event(DeployEvent::BuildStarted {
            artifact: layout.name.clone(),
            command: request.to_string(),
        });
        self.build_runner.run(&request)?;
        event_sink.on_event(DeployEvent::BuildFinished {
            artifact: layout.name.clone(),
        });

        Ok(true)
    }

    fn check_sources(&self, layout: &DeployLayout) -> DeployResult<()> {
        if !self.file_system.is_dir(&layout.build_output_dir) {
            return Err(DeployError::SourceNotFound {
                path: layout.build_output_dir.clone(),
            });
        }
        if !self.file_system.exists(&layout.metadata_source) {
            return Err(DeployError::SourceNotFound {
                path: layout.metadata_source.clone(),
            });
        }
        Ok(())
    }

    /// Whether the staged copy of the build output already carries the
    /// metadata file, so copying it in replaces a file instead of adding one.
    fn build_output_has_metadata(&self, layout: &DeployLayout, exclude: &ExcludePatterns) -> bool {
        self.file_system
            .exists(&layout.build_output_dir.join(&layout.metadata_name))
            && !exclude.is_excluded(&layout.metadata_name, false)
    }

    /// Replace the dist directory with build output + metadata file.
    /// Returns the number of build output files copied.
    fn stage(
        &self,
        layout: &DeployLayout,
        options: &DeployOptions,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> DeployResult<usize> {
        self.announce_replace(&layout.name, &layout.dist_dir, event_sink);

        let fs = &self.file_system;
        let files = replace_dir(fs, &layout.dist_dir, options.strategy, |dir: &Path| {
            let files = fs.copy_tree(&layout.build_output_dir, dir, &options.exclude)?;
            fs.copy_file(&layout.metadata_source, &dir.join(&layout.metadata_name))?;
            Ok(files)
        })?;

        event_sink.on_event(DeployEvent::Staged {
            artifact: layout.name.clone(),
            path: layout.dist_dir.clone(),
            files,
        });
        event_sink.on_event(DeployEvent::MetadataCopied {
            artifact: layout.name.clone(),
            path: layout.staged_metadata(),
        });

        Ok(files)
    }

    /// Replace the deployed directory with the staged tree.
    /// Returns the number of files deployed.
    fn publish(
        &self,
        layout: &DeployLayout,
        deployed_dir: &Path,
        options: &DeployOptions,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> DeployResult<usize> {
        self.announce_replace(&layout.name, deployed_dir, event_sink);

        let fs = &self.file_system;
        let files = replace_dir(fs, deployed_dir, options.strategy, |dir: &Path| {
            fs.copy_tree(&layout.dist_dir, dir, &ExcludePatterns::empty())
        })?;

        event_sink.on_event(DeployEvent::Deployed {
            artifact: layout.name.clone(),
            path: deployed_dir.to_path_buf(),
            files,
        });

        Ok(files)
    }

    #[cfg(test)]
    pub(super) fn build_runner(&self) -> &BR {
        &self.build_runner
    }

    fn announce_replace(&self, artifact: &str, path: &Path, event_sink: &Arc<dyn DeployEventSink>) {
        if self.file_system.exists(path) {
            event_sink.on_event(DeployEvent::Replacing {
                artifact: artifact.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
}
