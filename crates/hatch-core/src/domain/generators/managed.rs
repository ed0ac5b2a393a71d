//! Languages with a managed build tool: Java (Maven) and Haskell (Stack).

use super::{StaticTemplate, TemplateNode};
use crate::domain::value_objects::Language;

const JAVA_NODES: &[TemplateNode] = &[
    TemplateNode::dir("src/main/java"),
    TemplateNode::literal(
        "src/main/java/Main.java",
        concat!(
            "public class Main {\n",
            "    public static void main(String[] args) {\n",
            "        System.out.println(\"Hello, Java world!\");\n",
            "    }\n",
            "}\n",
        ),
    ),
    TemplateNode::literal(
        "pom.xml",
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n",
            "         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n",
            "         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0\n",
            "                             http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n",
            "    <modelVersion>4.0.0</modelVersion>\n",
            "    <groupId>com.example</groupId>\n",
            "    <artifactId>MyProject</artifactId>\n",
            "    <version>1.0-SNAPSHOT</version>\n",
            "</project>\n",
        ),
    ),
    TemplateNode::literal(".gitignore", "target\n"),
];

pub const JAVA: StaticTemplate = StaticTemplate::new(Language::Java, JAVA_NODES);

const HASKELL_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "Main.hs",
        concat!(
            "main :: IO ()\n",
            "main = putStrLn \"Hello, Haskell world!\"\n",
        ),
    ),
    TemplateNode::literal("stack.yaml", "resolver: lts-18.0\n"),
];

pub const HASKELL: StaticTemplate = StaticTemplate::new(Language::Haskell, HASKELL_NODES);

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::generators::Generator;

    #[test]
    fn java_uses_the_maven_layout() {
        let plan = JAVA.generate("demo");
        assert_eq!(
            plan.paths(),
            vec![
                PathBuf::from("demo/src/main/java"),
                PathBuf::from("demo/src/main/java/Main.java"),
                PathBuf::from("demo/pom.xml"),
                PathBuf::from("demo/.gitignore"),
            ]
        );
    }

    #[test]
    fn java_pom_is_static() {
        let a = JAVA.generate("demo");
        let b = JAVA.generate("something-else");
        let pom = |p: &crate::domain::ProjectStructure| {
            p.files()
                .find(|f| f.path.as_path().ends_with("pom.xml"))
                .map(|f| f.content.clone())
        };
        assert_eq!(pom(&a), pom(&b));
    }

    #[test]
    fn haskell_has_source_and_stack_file() {
        let plan = HASKELL.generate("demo");
        assert_eq!(plan.files().count(), 2);
        assert!(plan.directories().next().is_none());
    }
}
