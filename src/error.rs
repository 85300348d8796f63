//! `create-flask-app` errors
error_chain!{
    foreign_links {
        Io(::std::io::Error);
        Toml(::toml::de::Error);
        Term(::term::Error);
    }

    errors {
        EmptyProjectName {
            description("An empty project name was specified!")
            display("An empty project name was specified!")
        }
        InvalidVariant(variant: String) {
            description("An invalid template variant was specified!")
            display("An invalid template variant was specified: '{}'", variant)
        }
        Render(path: String, reason: String) {
            description("Unable to render a template!")
            display("Unable to render the template for '{}': {}", path, reason)
        }
        CommandFailed(command: String, code: Option<i32>) {
            description("An external command failed!")
            display("'{}' failed{}", command, match *code {
                Some(c) => format!(" with exit code {}", c),
                None => " (terminated by signal)".to_string(),
            })
        }
        Logging(reason: String) {
            description("Unable to initialize logging!")
            display("Unable to initialize logging: {}", reason)
        }
    }
}
