// Copyright (c) 2026 create-flask-app developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Create a [`Flask`][flask] REST API project skeleton, complete with a virtual environment,
//! pinned requirements and, optionally, [Swagger UI][swagger] docs and a git repository.
//!
//! # Installation
//! `cargo install create-flask-app`
//!
//! # Usage
//! `create-flask-app` asks for the project name when it is not given on the command line, then
//! creates `<name>/` in the current directory, writes the template files, creates
//! `<name>/.venv` with the configured interpreter and installs `requirements.txt` into it.
//!
//! ```text
//! create-flask-app 0.1.0
//!
//! USAGE:
//!     create-flask-app [FLAGS] [OPTIONS] [NAME]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!         --no-docs    Skip fetching the sample API document
//!         --no-git     Skip initializing a git repository
//!         --no-venv    Skip creating the virtual environment and installing requirements
//!     -q, --quiet      No output printed to stdout, other than the name prompt
//!     -V, --version    Prints version information
//!     -v, --verbose    Use verbose output (-vv debug, -vvv trace)
//!
//! OPTIONS:
//!         --color <WHEN>          Coloring [default: auto]  [values: auto, always, never]
//!     -c, --config <FILE>         Read tool locations and defaults from a TOML file
//!     -t, --template <VARIANT>    Specify the project template to generate [default: basic]
//!                                 [values: basic, swagger, full]
//!
//! ARGS:
//!     <NAME>    The project name, prompted for when omitted
//! ```
//!
//! # Templates
//! * `basic`: the Flask REST skeleton.
//! * `swagger`: adds dotenv configuration, Swagger UI and fetches a sample
//!   `docs/swagger.json`.
//! * `full`: adds a `.gitignore`, a pytest suite, and commits everything to a new git
//!   repository.
//!
//! `--quiet` silences the progress lines, the banner and the stdout of `python`, `pip`,
//! `curl` and `git`. The name prompt is still written to stdout when `NAME` is omitted.
//!
//! A failed API document fetch or git step is reported as a warning, a failed virtual
//! environment or `pip install` stops the run. Nothing already written is removed.
//!
//! # Configuration
//! ```toml
//! python = "python3.12"
//! git = "git"
//! curl = "curl"
//! api_doc_url = "https://petstore.swagger.io/v2/swagger.json"
//! commit_message = "Initial commit"
//! ```
//!
//! # Layout
//!
//! ### basic
//! ```text
//! .
//! ├── README.md
//! ├── app
//! │   ├── __init__.py
//! │   ├── models
//! │   │   └── __init__.py
//! │   ├── routes
//! │   │   ├── __init__.py
//! │   │   └── sample_routes.py
//! │   ├── schemas
//! │   │   └── __init__.py
//! │   └── utils
//! ├── migrations
//! ├── requirements.txt
//! ├── run.py
//! └── tests
//! ```
//!
//! [flask]: https://flask.palletsprojects.com/
//! [swagger]: https://swagger.io/tools/swagger-ui/
//!
#![deny(missing_docs)]
#![recursion_limit="128"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

extern crate clap;
extern crate mustache;
extern crate serde;
extern crate term;
extern crate toml;
extern crate tracing_subscriber;

#[cfg(test)]
extern crate tempfile;

mod config;
mod error;
mod external;
mod generate;
mod logging;
mod output;
mod run;
mod tmpl;

use std::io::{self, Write};
use std::process;

/// Userload Entry Point
fn main() {
    match run::run() {
        Ok(i) => process::exit(i),
        Err(e) => {
            let stderr = io::stderr();
            let mut stderr = stderr.lock();
            writeln!(stderr, "error: {}", e).expect("Unable to write to stderr!");
            for cause in e.iter().skip(1) {
                writeln!(stderr, "  caused by: {}", cause).expect("Unable to write to stderr!");
            }
            process::exit(1)
        }
    }
}
