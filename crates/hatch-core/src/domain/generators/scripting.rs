//! Interpreted languages: Python, Shell, Lua.

use super::{StaticTemplate, TemplateNode};
use crate::domain::value_objects::Language;

/// The `venv` placeholder directory is created after the files.
const PYTHON_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "main.py",
        concat!(
            "def main():\n",
            "    print(\"Hello, Python world!\")\n",
            "\n",
            "if __name__ == \"__main__\":\n",
            "    main()\n",
        ),
    ),
    TemplateNode::literal("requirements.txt", "# Add your Python dependencies here\n"),
    TemplateNode::dir("venv"),
];

pub const PYTHON: StaticTemplate = StaticTemplate::new(Language::Python, PYTHON_NODES);

const SHELL_NODES: &[TemplateNode] = &[TemplateNode::script(
    "main.sh",
    concat!("#!/bin/bash\n", "echo \"Hello, shell world!\"\n"),
)];

pub const SHELL: StaticTemplate = StaticTemplate::new(Language::Shell, SHELL_NODES);

const LUA_NODES: &[TemplateNode] = &[TemplateNode::literal("main.lua", "print(\"Hello, Lua world!\")\n")];

pub const LUA: StaticTemplate = StaticTemplate::new(Language::Lua, LUA_NODES);
