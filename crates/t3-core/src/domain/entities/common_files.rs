//! Files every generated project gets, whatever its layout.

use crate::domain::entities::{common::RelativePath, template::TemplateNode};

pub const README_PATH: &str = "README.md";
pub const GITIGNORE_PATH: &str = ".gitignore";

pub const README: &str = "# {{PROJECT_NAME}}\n\nYour new project description here.\n";

pub const GITIGNORE: &str = r#"# OS generated files
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db

# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# Logs
*.log
logs/

# Node modules
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*
"#;

/// README and ignore-file nodes, in the order they are written.
pub fn common_nodes() -> Vec<TemplateNode> {
    vec![
        TemplateNode::File {
            path: RelativePath::new(README_PATH),
            content: README.to_string(),
        },
        TemplateNode::File {
            path: RelativePath::new(GITIGNORE_PATH),
            content: GITIGNORE.to_string(),
        },
    ]
}
