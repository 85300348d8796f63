//! `create-flask-app` template files
use error::{Error, ErrorKind, Result};
use mustache;
use std::fmt;
use std::str::FromStr;

/// The template sets that can be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// The plain Flask REST skeleton.
    Basic,
    /// `Basic` plus dotenv configuration, Swagger UI and a fetched API document.
    Swagger,
    /// `Swagger` plus an ignore file, a pytest suite and a git repository.
    Full,
}

impl Variant {
    /// The values accepted on the command line.
    pub const NAMES: &'static [&'static str] = &["basic", "swagger", "full"];

    /// Does this variant fetch the sample API document into `docs/`?
    pub fn has_api_doc(&self) -> bool {
        *self != Variant::Basic
    }

    /// Does this variant initialize a git repository?
    pub fn has_git(&self) -> bool {
        *self == Variant::Full
    }

    /// Build the ordered template for this variant.
    pub fn template(&self) -> ProjectTemplate {
        match *self {
            Variant::Basic => ProjectTemplate::basic(),
            Variant::Swagger => ProjectTemplate::swagger(),
            Variant::Full => ProjectTemplate::full(),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Variant> {
        match s {
            "basic" => Ok(Variant::Basic),
            "swagger" => Ok(Variant::Swagger),
            "full" => Ok(Variant::Full),
            _ => Err(ErrorKind::InvalidVariant(s.to_string()).into()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Variant::Basic => "basic",
            Variant::Swagger => "swagger",
            Variant::Full => "full",
        };
        write!(f, "{}", name)
    }
}

/// A single file to write, relative to the project root.
#[derive(Clone, Debug)]
pub struct TemplateFile {
    /// Relative path, `/` separated.
    path: &'static str,
    /// The file body.
    body: &'static str,
    /// Is `{{{name}}}` substituted in the body?
    parameterized: bool,
}

impl TemplateFile {
    fn literal(path: &'static str, body: &'static str) -> TemplateFile {
        TemplateFile {
            path: path,
            body: body,
            parameterized: false,
        }
    }

    fn named(path: &'static str, body: &'static str) -> TemplateFile {
        TemplateFile {
            path: path,
            body: body,
            parameterized: true,
        }
    }

    /// Get the `path` value.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Get the `parameterized` value.
    pub fn parameterized(&self) -> bool {
        self.parameterized
    }

    /// Produce the final file contents for the given project name.
    pub fn render(&self, name: &str) -> Result<String> {
        if !self.parameterized {
            return Ok(self.body.to_string());
        }

        let ctx = Context { name: name };
        let tmpl = mustache::compile_str(self.body)
            .map_err(|e| ErrorKind::Render(self.path.to_string(), e.to_string()))?;
        tmpl.render_to_string(&ctx)
            .map_err(|e| ErrorKind::Render(self.path.to_string(), e.to_string()).into())
    }
}

/// Data handed to the renderer.
#[derive(Serialize)]
struct Context<'a> {
    /// The project name.
    name: &'a str,
}

/// Container for the directories and files of one generated project.
#[derive(Clone, Debug)]
pub struct ProjectTemplate {
    /// Directories to create, in order.
    dirs: Vec<&'static str>,
    /// Files to write, in order.
    files: Vec<TemplateFile>,
}

impl ProjectTemplate {
    /// The plain Flask REST skeleton.
    pub fn basic() -> ProjectTemplate {
        ProjectTemplate {
            dirs: BASE_DIRS.to_vec(),
            files: vec![
                TemplateFile::literal("run.py", RUN_PY),
                TemplateFile::literal("app/__init__.py", APP_INIT_PY),
                TemplateFile::literal("app/routes/__init__.py", ROUTES_INIT_PY),
                TemplateFile::literal("app/routes/sample_routes.py", SAMPLE_ROUTES_PY),
                TemplateFile::literal("app/models/__init__.py", ""),
                TemplateFile::literal("app/schemas/__init__.py", ""),
                TemplateFile::literal("requirements.txt", BASIC_REQUIREMENTS),
                TemplateFile::named("README.md", BASIC_README),
            ],
        }
    }

    /// The skeleton with dotenv configuration and Swagger UI.
    pub fn swagger() -> ProjectTemplate {
        let mut dirs = BASE_DIRS.to_vec();
        dirs.push("docs");

        ProjectTemplate {
            dirs: dirs,
            files: swagger_files(SWAGGER_REQUIREMENTS, SWAGGER_README),
        }
    }

    /// The Swagger skeleton with an ignore file and a pytest suite.
    pub fn full() -> ProjectTemplate {
        let mut dirs = BASE_DIRS.to_vec();
        dirs.push("docs");

        let mut files = swagger_files(FULL_REQUIREMENTS, FULL_README);
        files.push(TemplateFile::literal(".env.example", ENV_EXAMPLE));
        files.push(TemplateFile::literal(".gitignore", GITIGNORE));
        files.push(TemplateFile::literal("tests/__init__.py", ""));
        files.push(TemplateFile::literal("tests/conftest.py", CONFTEST_PY));
        files.push(TemplateFile::literal("tests/test_sample.py", TEST_SAMPLE_PY));

        ProjectTemplate {
            dirs: dirs,
            files: files,
        }
    }

    /// Get the `dirs` value.
    pub fn dirs(&self) -> &[&'static str] {
        &self.dirs
    }

    /// Get the `files` value.
    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }
}

fn swagger_files(requirements: &'static str, readme: &'static str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::literal("run.py", SWAGGER_RUN_PY),
        TemplateFile::named("config.py", CONFIG_PY),
        TemplateFile::named(".env", DOTENV),
        TemplateFile::literal(".flaskenv", FLASKENV),
        TemplateFile::literal("app/__init__.py", SWAGGER_APP_INIT_PY),
        TemplateFile::literal("app/routes/__init__.py", SWAGGER_ROUTES_INIT_PY),
        TemplateFile::literal("app/routes/sample_routes.py", SAMPLE_ROUTES_PY),
        TemplateFile::literal("app/routes/docs_routes.py", DOCS_ROUTES_PY),
        TemplateFile::literal("app/models/__init__.py", ""),
        TemplateFile::literal("app/schemas/__init__.py", ""),
        TemplateFile::literal("requirements.txt", requirements),
        TemplateFile::named("README.md", readme),
    ]
}

/// Directories shared by every variant.
const BASE_DIRS: &'static [&'static str] = &[
    "app",
    "app/routes",
    "app/models",
    "app/schemas",
    "app/utils",
    "migrations",
    "tests",
];

/// `run.py` for the basic variant
const RUN_PY: &'static str = r#"from app import create_app

app = create_app()

if __name__ == "__main__":
    app.run(debug=True)
"#;

/// `app/__init__.py` for the basic variant
const APP_INIT_PY: &'static str = r#"from flask import Flask
from app.routes import register_routes

def create_app():
    app = Flask(__name__)
    register_routes(app)
    return app
"#;

/// `app/routes/__init__.py` for the basic variant
const ROUTES_INIT_PY: &'static str = r#"from app.routes.sample_routes import sample_blueprint

def register_routes(app):
    app.register_blueprint(sample_blueprint, url_prefix="/api/sample")
"#;

/// `app/routes/sample_routes.py`
const SAMPLE_ROUTES_PY: &'static str = r#"from flask import Blueprint, jsonify

sample_blueprint = Blueprint("sample", __name__)

@sample_blueprint.route("/", methods=["GET"])
def get_sample():
    return jsonify({"message": "Hello, Flask RESTful API!"})
"#;

const BASIC_REQUIREMENTS: &'static str = "Flask==3.1.0\n";

const BASIC_README: &'static str = "# {{{name}}}\n\nA Flask RESTful API project.";

/// `run.py` for the swagger variants
const SWAGGER_RUN_PY: &'static str = r#"from dotenv import load_dotenv

load_dotenv()
load_dotenv(".flaskenv")

from app import create_app

app = create_app()

if __name__ == "__main__":
    app.run(host=app.config["HOST"], port=app.config["PORT"], debug=app.config["DEBUG"])
"#;

/// `config.py`
const CONFIG_PY: &'static str = r#"import os


class Config:
    APP_NAME = os.environ.get("APP_NAME", "{{{name}}}")
    SECRET_KEY = os.environ.get("SECRET_KEY", "change-me")
    HOST = os.environ.get("HOST", "127.0.0.1")
    PORT = int(os.environ.get("PORT", "5000"))
    DEBUG = os.environ.get("FLASK_DEBUG", "0") == "1"
    SWAGGER_URL = "/api/docs"
    API_DOC_URL = "/api/docs/swagger.json"
"#;

/// `.env`
const DOTENV: &'static str = r#"APP_NAME={{{name}}}
SECRET_KEY=change-me
HOST=127.0.0.1
PORT=5000
"#;

/// `.env.example`
const ENV_EXAMPLE: &'static str = r#"APP_NAME=
SECRET_KEY=
HOST=127.0.0.1
PORT=5000
"#;

/// `.flaskenv`
const FLASKENV: &'static str = r#"FLASK_APP=run.py
FLASK_DEBUG=1
"#;

/// `app/__init__.py` for the swagger variants
const SWAGGER_APP_INIT_PY: &'static str = r#"from flask import Flask
from flask_swagger_ui import get_swaggerui_blueprint

from config import Config
from app.routes import register_routes

def create_app(config_class=Config):
    app = Flask(__name__)
    app.config.from_object(config_class)

    swagger_blueprint = get_swaggerui_blueprint(
        app.config["SWAGGER_URL"],
        app.config["API_DOC_URL"],
        config={"app_name": app.config["APP_NAME"]},
    )
    app.register_blueprint(swagger_blueprint, url_prefix=app.config["SWAGGER_URL"])

    register_routes(app)
    return app
"#;

/// `app/routes/__init__.py` for the swagger variants
const SWAGGER_ROUTES_INIT_PY: &'static str = r#"from app.routes.docs_routes import docs_blueprint
from app.routes.sample_routes import sample_blueprint

def register_routes(app):
    app.register_blueprint(sample_blueprint, url_prefix="/api/sample")
    app.register_blueprint(docs_blueprint, url_prefix="/api/docs")
"#;

/// `app/routes/docs_routes.py`
const DOCS_ROUTES_PY: &'static str = r#"import os

from flask import Blueprint, send_from_directory

DOCS_DIR = os.path.join(os.path.dirname(os.path.abspath(__file__)), "..", "..", "docs")

docs_blueprint = Blueprint("docs", __name__)

@docs_blueprint.route("/swagger.json", methods=["GET"])
def get_api_doc():
    return send_from_directory(DOCS_DIR, "swagger.json")
"#;

const SWAGGER_REQUIREMENTS: &'static str = "Flask==3.1.0\n\
flask-swagger-ui==4.11.1\n\
python-dotenv==1.0.1\n";

const SWAGGER_README: &'static str = "# {{{name}}}\n\n\
A Flask RESTful API project.\n\n\
The API documentation is served at `/api/docs` once the app is running.\n";

const FULL_REQUIREMENTS: &'static str = "Flask==3.1.0\n\
flask-swagger-ui==4.11.1\n\
python-dotenv==1.0.1\n\
pytest==8.3.4\n";

const FULL_README: &'static str = "# {{{name}}}\n\n\
A Flask RESTful API project.\n\n\
The API documentation is served at `/api/docs` once the app is running.\n\n\
## Tests\n\n\
```\n\
pytest\n\
```\n";

/// `.gitignore`
const GITIGNORE: &'static str = r#"__pycache__/
*.py[cod]
.venv/
.env
.pytest_cache/
instance/
*.egg-info/
dist/
build/
"#;

/// `tests/conftest.py`
const CONFTEST_PY: &'static str = r#"import pytest

from app import create_app


@pytest.fixture
def client():
    app = create_app()
    app.config["TESTING"] = True
    with app.test_client() as client:
        yield client
"#;

/// `tests/test_sample.py`
const TEST_SAMPLE_PY: &'static str = r#"def test_get_sample(client):
    response = client.get("/api/sample/")
    assert response.status_code == 200
    assert response.get_json() == {"message": "Hello, Flask RESTful API!"}
"#;
