//! JavaScript-family projects: Node.js, TypeScript and a static web page.

use super::{StaticTemplate, TemplateNode};
use crate::domain::value_objects::Language;

const NODE_NODES: &[TemplateNode] = &[
    TemplateNode::literal("index.js", "console.log('Hello, Node.js world!');\n"),
    TemplateNode::parameterized(
        "package.json",
        concat!(
            "{\n",
            "  \"name\": \"{{PROJECT_NAME}}\",\n",
            "  \"version\": \"1.0.0\",\n",
            "  \"main\": \"index.js\",\n",
            "  \"scripts\": {\n",
            "    \"start\": \"node index.js\"\n",
            "  },\n",
            "  \"dependencies\": {}\n",
            "}\n",
        ),
    ),
    TemplateNode::literal(".gitignore", "node_modules\n"),
];

pub const NODE: StaticTemplate = StaticTemplate::new(Language::Node, NODE_NODES);

const TYPESCRIPT_NODES: &[TemplateNode] = &[
    TemplateNode::literal("index.ts", "console.log('Hello, TypeScript world!');\n"),
    TemplateNode::literal(
        "tsconfig.json",
        concat!(
            "{\n",
            "  \"compilerOptions\": {\n",
            "    \"target\": \"ES6\",\n",
            "    \"module\": \"commonjs\",\n",
            "    \"strict\": true,\n",
            "    \"esModuleInterop\": true\n",
            "  }\n",
            "}\n",
        ),
    ),
    TemplateNode::parameterized(
        "package.json",
        concat!(
            "{\n",
            "  \"name\": \"{{PROJECT_NAME}}\",\n",
            "  \"version\": \"1.0.0\",\n",
            "  \"main\": \"index.js\",\n",
            "  \"scripts\": {\n",
            "    \"build\": \"tsc\",\n",
            "    \"start\": \"node index.js\"\n",
            "  },\n",
            "  \"dependencies\": {},\n",
            "  \"devDependencies\": {\n",
            "    \"typescript\": \"^4.0.0\"\n",
            "  }\n",
            "}\n",
        ),
    ),
    TemplateNode::literal(".gitignore", "node_modules\n"),
];

pub const TYPESCRIPT: StaticTemplate = StaticTemplate::new(Language::TypeScript, TYPESCRIPT_NODES);

const WEB_NODES: &[TemplateNode] = &[
    TemplateNode::literal(
        "index.html",
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"UTF-8\">\n",
            "  <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "  <title>Hello Web</title>\n",
            "  <link rel=\"stylesheet\" href=\"style.css\">\n",
            "</head>\n",
            "<body>\n",
            "  <h1>Hello, web world!</h1>\n",
            "  <script src=\"script.js\"></script>\n",
            "</body>\n",
            "</html>\n",
        ),
    ),
    TemplateNode::literal(
        "style.css",
        concat!(
            "body {\n",
            "  font-family: Arial, sans-serif;\n",
            "  background: #f0f0f0;\n",
            "  color: #333;\n",
            "}\n",
        ),
    ),
    TemplateNode::literal("script.js", "console.log('Hello, web world!');\n"),
];

pub const WEB: StaticTemplate = StaticTemplate::new(Language::Web, WEB_NODES);
