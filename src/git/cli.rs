use crate::error::{Result, VersionInfoError};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Answers repository queries by running the `git` binary
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Run `git` from `PATH` inside `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        GitCli::with_program("git", workdir)
    }

    /// Run a specific git executable inside `workdir`
    pub fn with_program(program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        GitCli {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// Run git and return stdout, or `None` when it exits non-zero
    fn try_run(&self, args: &[&str]) -> Result<Option<String>> {
        debug!(program = %self.program, ?args, "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                VersionInfoError::command(format!(
                    "Failed to execute {} {}: {}",
                    self.program,
                    args.join(" "),
                    e
                ))
            })?;

        if !output.status.success() {
            debug!(
                code = output.status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git exited unsuccessfully"
            );
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    /// Run git and require a zero exit code
    fn run(&self, args: &[&str]) -> Result<String> {
        self.try_run(args)?.ok_or_else(|| {
            VersionInfoError::command(format!(
                "{} {} exited unsuccessfully in {}",
                self.program,
                args.join(" "),
                self.workdir.display()
            ))
        })
    }
}

impl super::Repository for GitCli {
    fn list_tags(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--list"])?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    fn describe_exact_tag_at_head(&self) -> Result<Option<String>> {
        let stdout = self.try_run(&["describe", "--exact-match", "HEAD"])?;

        Ok(stdout
            .map(|s| s.trim().to_string())
            .filter(|tag| !tag.is_empty()))
    }

    fn read_tag_annotation(&self, tag: &str) -> Result<Option<String>> {
        let reference = format!("refs/tags/{}", tag);
        let kind = self.run(&["cat-file", "-t", &reference])?;
        if kind.trim() != "tag" {
            debug!(tag, kind = kind.trim(), "tag is lightweight");
            return Ok(None);
        }

        let content = self.run(&["cat-file", "-p", &reference])?;
        // Tag objects are header lines, a blank line, then the message
        let message = content
            .split_once("\n\n")
            .map(|(_, message)| message)
            .unwrap_or_default();

        Ok(Some(message.to_string()))
    }

    fn short_head_hash(&self) -> Result<String> {
        let stdout = self.run(&["rev-parse", "--short", "HEAD"])?;
        let hash = stdout.trim();

        if hash.is_empty() {
            return Err(VersionInfoError::command(
                "git rev-parse --short HEAD printed nothing",
            ));
        }

        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_missing_program_is_command_error() {
        let git = GitCli::with_program("definitely-not-a-git-binary", ".");
        let err = git.list_tags().unwrap_err();
        assert!(matches!(err, VersionInfoError::Command(_)));
    }
}
