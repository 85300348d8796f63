//! `create-flask-app` terminal output
use error::Result;
use std::io::{self, IsTerminal, Write};
use term::{self, color, Terminal};

/// When to color progress output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when the stream is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Map the `--color` value, anything unknown is `Auto`.
    pub fn from_arg(arg: Option<&str>) -> ColorChoice {
        match arg {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Progress, warning and banner output for a single run.
pub struct Output {
    quiet: bool,
    color: ColorChoice,
}

impl Output {
    /// Create a new output handle.
    pub fn new(quiet: bool, color: ColorChoice) -> Output {
        Output {
            quiet: quiet,
            color: color,
        }
    }

    /// Are stdout writes, ours and the tools', suppressed?
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Announce a generation step, e.g. `[+] creating directories`.
    pub fn step(&self, msg: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut stdout = io::stdout();
        writeln!(stdout)?;
        if self.colored(stdout.is_terminal()) {
            if let Some(mut t) = term::stdout() {
                return paint(&mut *t, color::GREEN, "[+]", msg);
            }
        }
        writeln!(stdout, "[+] {}", msg)?;
        Ok(())
    }

    /// Report a recoverable failure on stderr.
    pub fn warn(&self, msg: &str) -> Result<()> {
        let mut stderr = io::stderr();
        if self.colored(stderr.is_terminal()) {
            if let Some(mut t) = term::stderr() {
                return paint(&mut *t, color::YELLOW, "warning:", msg);
            }
        }
        writeln!(stderr, "warning: {}", msg)?;
        Ok(())
    }

    /// Print the closing banner and the manual follow-up steps.
    pub fn success(&self, name: &str, venv: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let lines = success_lines(name, venv);
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        if self.colored(stdout.is_terminal()) {
            if let Some(mut t) = term::stdout() {
                t.fg(color::GREEN)?;
                t.attr(term::Attr::Bold)?;
                writeln!(t, "{}", lines[0])?;
                t.reset()?;
                for line in &lines[1..] {
                    writeln!(t, "{}", line)?;
                }
                return Ok(());
            }
        }
        for line in &lines {
            writeln!(stdout, "{}", line)?;
        }
        Ok(())
    }

    fn colored(&self, is_terminal: bool) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

fn paint<T>(t: &mut T, fg: color::Color, label: &str, msg: &str) -> Result<()>
    where T: Terminal + ?Sized
{
    t.fg(fg)?;
    write!(t, "{}", label)?;
    t.reset()?;
    writeln!(t, " {}", msg)?;
    Ok(())
}

/// The success banner, one entry per line.
pub fn success_lines(name: &str, venv: bool) -> Vec<String> {
    let mut lines = vec![
        format!("{:=^30}", " SUCCESS "),
        format!("Project {} created successfully!", name),
    ];

    if venv {
        lines.push(format!("Navigate to the {} directory, activate the virtual environment, \
                            and run the app:",
                           name));
        lines.push(format!("  1. cd {}", name));
        lines.push("  2. source .venv/bin/activate #if linux or mac".to_string());
        lines.push("  3. .venv\\Scripts\\activate.bat #if windows".to_string());
        lines.push("  4. python run.py".to_string());
    } else {
        lines.push(format!("Navigate to the {} directory, create and activate a virtual \
                            environment, install the requirements, and run the app:",
                           name));
        lines.push(format!("  1. cd {}", name));
        lines.push("  2. python -m venv .venv".to_string());
        lines.push("  3. source .venv/bin/activate #if linux or mac".to_string());
        lines.push("  4. .venv\\Scripts\\activate.bat #if windows".to_string());
        lines.push("  5. pip install -r requirements.txt".to_string());
        lines.push("  6. python run.py".to_string());
    }
    lines
}

#[cfg(test)]
mod test {
    use super::{success_lines, ColorChoice};

    #[test]
    fn banner_header_is_centered() {
        let lines = success_lines("demo", true);
        assert_eq!(lines[0], "========== SUCCESS ===========");
        assert_eq!(lines[0].len(), 30);
    }

    #[test]
    fn banner_with_venv() {
        let lines = success_lines("orders-api", true);
        assert_eq!(lines,
                   vec!["========== SUCCESS ===========",
                        "Project orders-api created successfully!",
                        "Navigate to the orders-api directory, activate the virtual \
                         environment, and run the app:",
                        "  1. cd orders-api",
                        "  2. source .venv/bin/activate #if linux or mac",
                        "  3. .venv\\Scripts\\activate.bat #if windows",
                        "  4. python run.py"]);
    }

    #[test]
    fn banner_without_venv_adds_setup_steps() {
        let lines = success_lines("orders-api", false);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[3], "  1. cd orders-api");
        assert_eq!(lines[4], "  2. python -m venv .venv");
        assert_eq!(lines[7], "  5. pip install -r requirements.txt");
        assert_eq!(lines[8], "  6. python run.py");
    }

    #[test]
    fn color_choice_from_arg() {
        assert_eq!(ColorChoice::from_arg(Some("always")), ColorChoice::Always);
        assert_eq!(ColorChoice::from_arg(Some("never")), ColorChoice::Never);
        assert_eq!(ColorChoice::from_arg(Some("auto")), ColorChoice::Auto);
        assert_eq!(ColorChoice::from_arg(None), ColorChoice::Auto);
    }
}
