//! `create-flask-app` runtime operation
use clap::{App, Arg, ArgMatches};
use config::Config;
use error::{ErrorKind, Result};
use external;
use generate::Generator;
use logging;
use output::{ColorChoice, Output};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tmpl::Variant;

/// The command line definition.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Creates a Flask REST API project")
        .arg(Arg::with_name("template")
                 .long("template")
                 .short("t")
                 .value_name("VARIANT")
                 .help("Specify the project template to generate")
                 .possible_values(Variant::NAMES)
                 .default_value("basic")
                 .takes_value(true))
        .arg(Arg::with_name("config")
                 .long("config")
                 .short("c")
                 .value_name("FILE")
                 .help("Read tool locations and defaults from a TOML file")
                 .takes_value(true))
        .arg(Arg::with_name("color")
                 .long("color")
                 .value_name("WHEN")
                 .help("Coloring")
                 .possible_values(&["auto", "always", "never"])
                 .default_value("auto")
                 .takes_value(true))
        .arg(Arg::with_name("no-venv")
                 .long("no-venv")
                 .help("Skip creating the virtual environment and installing requirements"))
        .arg(Arg::with_name("no-docs")
                 .long("no-docs")
                 .help("Skip fetching the sample API document"))
        .arg(Arg::with_name("no-git")
                 .long("no-git")
                 .help("Skip initializing a git repository"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .long("verbose")
                 .multiple(true)
                 .help("Use verbose output (-vv debug, -vvv trace)"))
        .arg(Arg::with_name("quiet")
                 .short("q")
                 .long("quiet")
                 .conflicts_with("verbose")
                 .help("No output printed to stdout, other than the name prompt"))
        .arg(Arg::with_name("name")
                 .value_name("NAME")
                 .help("The project name, prompted for when omitted")
                 .takes_value(true))
}

/// What a single invocation will do.
#[derive(Debug)]
pub struct Plan {
    /// The template set.
    pub variant: Variant,
    /// Create `.venv` and install the manifest?
    pub venv: bool,
    /// Fetch the sample API document?
    pub docs: bool,
    /// Initialize a git repository?
    pub git: bool,
}

impl Plan {
    /// Resolve the variant's optional steps against the `--no-*` flags.
    pub fn from_matches(matches: &ArgMatches) -> Result<Plan> {
        let variant: Variant = matches.value_of("template").unwrap_or("basic").parse()?;
        Ok(Plan {
            variant: variant,
            venv: !matches.is_present("no-venv"),
            docs: variant.has_api_doc() && !matches.is_present("no-docs"),
            git: variant.has_git() && !matches.is_present("no-git"),
        })
    }
}

/// Ask for the project name on stdin.
fn prompt_name<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "Enter the project name: ")?;
    prompt.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Trim the raw name and reject an empty one.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ErrorKind::EmptyProjectName.into())
    } else {
        Ok(name.to_string())
    }
}

/// Parse the args, and generate the project.
pub fn run() -> Result<i32> {
    let matches = app().get_matches();

    logging::init(matches.occurrences_of("verbose"))?;

    let config = match matches.value_of("config") {
        Some(path) => Config::from_path(Path::new(path))?,
        None => Config::default(),
    };
    let plan = Plan::from_matches(&matches)?;
    let out = Output::new(matches.is_present("quiet"),
                          ColorChoice::from_arg(matches.value_of("color")));

    let name = match matches.value_of("name") {
        Some(name) => validate_name(name)?,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            validate_name(&prompt_name(&mut stdin.lock(), &mut stdout.lock())?)?
        }
    };

    info!("generating '{}' from the {} template", name, plan.variant);
    debug!("{:?}", config);

    let cwd = env::current_dir()?;
    generate(&cwd, &name, &plan, &config, &out)?;
    out.success(&name, plan.venv)?;
    Ok(0)
}

/// Run every generation step in order.
///
/// Environment failures abort the run, the API document and git steps only warn.
pub fn generate(parent: &Path,
                name: &str,
                plan: &Plan,
                config: &Config,
                out: &Output)
                -> Result<()> {
    let template = plan.variant.template();
    let gen = Generator::new(parent, name, &template);

    out.step("creating directories")?;
    gen.create_dirs()?;

    out.step("creating files")?;
    gen.write_files()?;

    if plan.venv {
        let venv = external::venv_dir(gen.root());
        out.step("creating virtual environment")?;
        external::create_venv(&config.python, &venv, out.quiet())?;

        out.step("installing requirements")?;
        external::install_requirements(&external::pip_path(&venv),
                                       &gen.root().join("requirements.txt"),
                                       out.quiet())?;
    }

    if plan.docs {
        out.step("fetching API documentation")?;
        let dest = gen.root().join("docs").join("swagger.json");
        if let Err(e) = external::fetch(&config.curl, &config.api_doc_url, &dest, out.quiet()) {
            out.warn(&describe(&e))?;
        }
    }

    if plan.git {
        out.step("initializing git repository")?;
        if let Err(e) = external::git_init(&config.git,
                                           gen.root(),
                                           &config.commit_message,
                                           out.quiet()) {
            out.warn(&describe(&e))?;
        }
    }

    Ok(())
}

/// Flatten an error and its causes onto one line.
pub fn describe(e: &::error::Error) -> String {
    e.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(": ")
}

#[cfg(test)]
mod test {
    use super::{app, describe, generate, prompt_name, validate_name, Plan};
    use config::Config;
    use error::{Error, ErrorKind};
    use output::{ColorChoice, Output};
    use std::io::Cursor;
    use tempfile::tempdir;
    use tmpl::Variant;

    fn plan(args: &[&str]) -> Plan {
        let mut argv = vec!["create-flask-app"];
        argv.extend_from_slice(args);
        let matches = app().get_matches_from_safe(argv).expect("valid args");
        Plan::from_matches(&matches).expect("plan")
    }

    fn missing_tools() -> Config {
        Config {
            python: "create-flask-app-no-python".to_string(),
            git: "create-flask-app-no-git".to_string(),
            curl: "create-flask-app-no-curl".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn default_plan_is_basic_with_venv() {
        let plan = plan(&["demo"]);
        assert_eq!(plan.variant, Variant::Basic);
        assert!(plan.venv);
        assert!(!plan.docs);
        assert!(!plan.git);
    }

    #[test]
    fn full_plan_and_opt_outs() {
        let full = plan(&["-t", "full", "demo"]);
        assert!(full.venv && full.docs && full.git);

        let trimmed = plan(&["--template", "full", "--no-venv", "--no-git", "demo"]);
        assert!(!trimmed.venv);
        assert!(trimmed.docs);
        assert!(!trimmed.git);
    }

    #[test]
    fn unknown_template_is_rejected() {
        assert!(app().get_matches_from_safe(vec!["create-flask-app", "-t", "django"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(app().get_matches_from_safe(vec!["create-flask-app", "-q", "-v"]).is_err());
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("  inventory \nignored\n");
        let mut prompt = Vec::new();
        let raw = prompt_name(&mut input, &mut prompt).expect("prompt");
        assert_eq!(prompt, b"Enter the project name: ");
        assert_eq!(validate_name(&raw).expect("name"), "inventory");
    }

    #[test]
    fn empty_name_is_rejected() {
        for raw in &["", "\n", "   \t\n"] {
            match validate_name(raw) {
                Err(Error(ErrorKind::EmptyProjectName, _)) => {}
                other => panic!("expected EmptyProjectName, got {:?}", other),
            }
        }
    }

    #[test]
    fn missing_git_and_curl_only_warn() {
        let parent = tempdir().expect("tempdir");
        let plan = Plan {
            variant: Variant::Full,
            venv: false,
            docs: true,
            git: true,
        };
        let out = Output::new(true, ColorChoice::Never);

        generate(parent.path(), "demo", &plan, &missing_tools(), &out).expect("generate");

        let root = parent.path().join("demo");
        assert!(root.join(".gitignore").is_file());
        assert!(root.join("docs").is_dir());
        assert!(!root.join("docs").join("swagger.json").exists());
        assert!(!root.join(".git").exists());
    }

    #[test]
    fn missing_interpreter_aborts_without_rollback() {
        let parent = tempdir().expect("tempdir");
        let plan = Plan {
            variant: Variant::Basic,
            venv: true,
            docs: false,
            git: false,
        };
        let out = Output::new(true, ColorChoice::Never);

        let err = generate(parent.path(), "demo", &plan, &missing_tools(), &out).unwrap_err();
        assert!(describe(&err).contains("Unable to create the virtual environment"));
        assert!(parent.path().join("demo").join("run.py").is_file());
    }
}
