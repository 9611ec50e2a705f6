use std::path::Path;

use crate::domain::AppError;
use crate::domain::project::{DEV_DEPENDENCIES, PACKAGE_MANAGER, RUNTIME_DEPENDENCIES};
use crate::domain::runtime::ensure_supported_node;
use crate::ports::{CommandInvocation, CommandRunner};

/// Fail early when the installed Node.js is too old to build the project.
pub(super) fn check_runtime<C: CommandRunner>(runner: &C) -> Result<(), AppError> {
    let output = runner.capture(&CommandInvocation::new("node").args(["--version"]))?;
    tracing::debug!(version = %output.trim(), "found node");
    ensure_supported_node(&output)
}

/// The package-manager invocations for one run, in order.
pub(super) fn build_steps(root: &Path, is_new: bool) -> Vec<CommandInvocation> {
    let step = |args: &[&str]| {
        CommandInvocation::new(PACKAGE_MANAGER).args(args.iter().copied()).current_dir(root)
    };

    let mut steps = vec![step(&[])];
    if is_new {
        let mut add = vec!["add"];
        add.extend(RUNTIME_DEPENDENCIES);
        steps.push(step(&add));

        let mut add_dev = vec!["add", "--dev"];
        add_dev.extend(DEV_DEPENDENCIES);
        steps.push(step(&add_dev));
    }
    steps.push(step(&["build"]));
    steps.push(step(&["deploy"]));
    steps
}

/// Run every step in order; the first failure stops the rest.
pub(super) fn build_and_deploy<C: CommandRunner>(
    runner: &C,
    root: &Path,
    is_new: bool,
) -> Result<(), AppError> {
    for step in build_steps(root, is_new) {
        println!("Running {}...", step);
        runner.run(&step)?;
    }
    Ok(())
}
