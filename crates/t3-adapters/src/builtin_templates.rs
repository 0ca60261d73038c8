//! Built-in project layouts.
//!
//! Each layout only declares what is specific to it. The README and
//! `.gitignore` every generated project receives are added by
//! `ProjectGenerator`, so they never appear here.
//!
//! | Name     | Directories                | Files                      |
//! |----------|----------------------------|----------------------------|
//! | `basic`  | `src/`, `docs/`, `tests/`  | `src/main.py`              |
//! | `python` | as `basic`                 | `src/main.py`, `pyproject.toml` |
//! | `web`    | `src/`, `public/`, `assets/` | `public/index.html`      |

use tracing::instrument;

use t3_core::domain::{DomainError, Template};

const MAIN_PY: &str = r#""""Main module for {{PROJECT_NAME}}."""

def main():
    print("Hello from {{PROJECT_NAME}}!")

if __name__ == "__main__":
    main()
"#;

const PYPROJECT_TOML: &str = r#"[project]
name = "{{PROJECT_NAME}}"
version = "0.1.0"
description = "Add your description here"
readme = "README.md"
requires-python = ">=3.11"
dependencies = []

[project.optional-dependencies]
dev = [
    "pytest>=7.0.0",
    "ruff>=0.1.0",
]

[tool.ruff]
line-length = 88
target-version = "py311"
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{PROJECT_NAME}}</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        h1 { color: #333; }
    </style>
</head>
<body>
    <h1>Welcome to {{PROJECT_NAME}}</h1>
    <p>Your web project is ready!</p>
</body>
</html>
"#;

/// All layouts that ship with the binary, sorted by name.
#[instrument]
pub fn all_templates() -> Result<Vec<Template>, DomainError> {
    Ok(vec![basic()?, python()?, web()?])
}

/// Source, docs and tests folders plus a runnable entry point.
pub fn basic() -> Result<Template, DomainError> {
    Template::builder("basic")
        .description("Basic project structure")
        .directory("src")?
        .directory("docs")?
        .directory("tests")?
        .file("src/main.py", MAIN_PY)?
        .build()
}

/// `basic` plus a `pyproject.toml` with pytest and ruff as dev extras.
pub fn python() -> Result<Template, DomainError> {
    Template::builder("python")
        .description("Python project with pyproject.toml")
        .directory("src")?
        .directory("docs")?
        .directory("tests")?
        .file("src/main.py", MAIN_PY)?
        .file("pyproject.toml", PYPROJECT_TOML)?
        .build()
}

/// Static site skeleton with a landing page.
pub fn web() -> Result<Template, DomainError> {
    Template::builder("web")
        .description("Web project with HTML/CSS/JS")
        .directory("src")?
        .directory("public")?
        .directory("assets")?
        .file("public/index.html", INDEX_HTML)?
        .build()
}
