//! Compiled languages with a plain toolchain: C, C++, Go, Rust.

use super::{StaticTemplate, TemplateNode};
use crate::domain::value_objects::Language;

const C_GITIGNORE: &str = "main\n";

const C_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "main.c",
        concat!(
            "#include <stdio.h>\n",
            "\n",
            "int main() {\n",
            "    printf(\"Hello, C world!\\n\");\n",
            "    return 0;\n",
            "}\n",
        ),
    ),
    TemplateNode::literal(
        "Makefile",
        concat!(
            "all:\n",
            "\tgcc main.c -o main\n",
            "clean:\n",
            "\trm -f main\n",
        ),
    ),
    TemplateNode::literal(".gitignore", C_GITIGNORE),
];

pub const C: StaticTemplate = StaticTemplate::new(Language::C, C_NODES);

const CPP_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "main.cpp",
        concat!(
            "#include <iostream>\n",
            "\n",
            "int main() {\n",
            "    std::cout << \"Hello, C++ world!\" << std::endl;\n",
            "    return 0;\n",
            "}\n",
        ),
    ),
    TemplateNode::literal(
        "Makefile",
        concat!(
            "all:\n",
            "\tg++ main.cpp -o main\n",
            "clean:\n",
            "\trm -f main\n",
        ),
    ),
    TemplateNode::literal(
        "CMakeLists.txt",
        concat!(
            "cmake_minimum_required(VERSION 3.0)\n",
            "project(MyProject)\n",
            "add_executable(main main.cpp)\n",
        ),
    ),
    TemplateNode::literal(".gitignore", C_GITIGNORE),
];

pub const CPP: StaticTemplate = StaticTemplate::new(Language::Cpp, CPP_NODES);

const GO_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "main.go",
        concat!(
            "package main\n",
            "\n",
            "import \"fmt\"\n",
            "\n",
            "func main() {\n",
            "    fmt.Println(\"Hello, Go world!\")\n",
            "}\n",
        ),
    ),
    TemplateNode::parameterized("go.mod", "module {{PROJECT_NAME}}\n\ngo 1.20\n"),
    TemplateNode::literal(".gitignore", "bin\nvendor\n"),
];

pub const GO: StaticTemplate = StaticTemplate::new(Language::Go, GO_NODES);

const RUST_NODES: &[TemplateNode] = &[
    TemplateNode::dir("src"),
    TemplateNode::literal(
        "src/main.rs",
        concat!(
            "fn main() {\n",
            "    println!(\"Hello, Rust world!\");\n",
            "}\n",
        ),
    ),
    TemplateNode::parameterized(
        "Cargo.toml",
        concat!(
            "[package]\n",
            "name = \"{{PROJECT_NAME}}\"\n",
            "version = \"0.1.0\"\n",
            "edition = \"2021\"\n",
            "\n",
            "[dependencies]\n",
        ),
    ),
    TemplateNode::literal(".gitignore", "target\n"),
];

pub const RUST: StaticTemplate = StaticTemplate::new(Language::Rust, RUST_NODES);
