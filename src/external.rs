//! `create-flask-app` external tool invocations
use error::{ErrorKind, Result, ResultExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Run a command to completion, inheriting stdio. `quiet` discards the child's stdout.
///
/// A command that cannot be spawned, or that exits non-zero, is an error.
fn exec(cmd: &mut Command, quiet: bool) -> Result<()> {
    let line = format!("{:?}", cmd);
    debug!("running {}", line);
    if quiet {
        cmd.stdout(Stdio::null());
    }
    let status = cmd.status().chain_err(|| format!("Unable to run {}", line))?;
    if status.success() {
        Ok(())
    } else {
        Err(ErrorKind::CommandFailed(line, status.code()).into())
    }
}

/// The virtual environment directory inside a project.
pub fn venv_dir(root: &Path) -> PathBuf {
    root.join(".venv")
}

/// The environment's package installer.
pub fn pip_path(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("pip")
    } else {
        venv.join("bin").join("pip")
    }
}

/// `<python> -m venv <venv>`
pub fn create_venv(python: &str, venv: &Path, quiet: bool) -> Result<()> {
    exec(Command::new(python).arg("-m").arg("venv").arg(venv), quiet)
        .chain_err(|| format!("Unable to create the virtual environment in '{}'", venv.display()))
}

/// `<pip> install [-q] -r <manifest>`
pub fn install_requirements(pip: &Path, manifest: &Path, quiet: bool) -> Result<()> {
    let mut cmd = Command::new(pip);
    cmd.arg("install");
    if quiet {
        cmd.arg("-q");
    }
    exec(cmd.arg("-r").arg(manifest), quiet)
        .chain_err(|| format!("Unable to install '{}'", manifest.display()))
}

/// `<curl> -fsSL -o <dest> <url>`
pub fn fetch(curl: &str, url: &str, dest: &Path, quiet: bool) -> Result<()> {
    exec(Command::new(curl).arg("-fsSL").arg("-o").arg(dest).arg(url), quiet)
        .chain_err(|| format!("Unable to fetch '{}'", url))
}

/// `git init`, `git add .` and `git commit -m <message>` inside `dir`. Quiet adds `-q` to
/// `init` and `commit`.
pub fn git_init(git: &str, dir: &Path, message: &str, quiet: bool) -> Result<()> {
    let steps: [&[&str]; 3] = [&["init"], &["add", "."], &["commit", "-m", message]];
    for args in &steps {
        let mut cmd = Command::new(git);
        cmd.arg(args[0]);
        if quiet && args[0] != "add" {
            cmd.arg("-q");
        }
        exec(cmd.args(&args[1..]).current_dir(dir), quiet)
            .chain_err(|| format!("Unable to initialize a git repository in '{}'", dir.display()))?;
    }
    Ok(())
}
