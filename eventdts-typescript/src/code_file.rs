//! CodeFile abstraction for structured declaration-file generation.
//!
//! A file is a list of sections separated by exactly one blank line. A
//! section may be empty; its separator is still emitted, which keeps the
//! layout of a generated file independent of how many items it holds.

use eventdts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a TypeScript declaration file.
///
/// # Example
///
/// ```
/// use eventdts_typescript::{CodeFile, ast::{Comment, Export}};
///
/// let code = CodeFile::new()
///     .add(Comment::new("generated"))
///     .add_all([Export::all_from("./click")])
///     .render();
///
/// assert_eq!(code, "// generated\n\nexport * from \"./click\"\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    sections: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section holding a single node.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.sections.push(node.to_fragments());
        self
    }

    /// Add a section holding every node, one after the other.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        let section = nodes.into_iter().flat_map(|n| n.to_fragments()).collect();
        self.sections.push(section);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for (i, fragments) in self.sections.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Comment, DeclareModule, Export, FnDecl, Import};

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_blank_line_between_sections() {
        let code = CodeFile::new()
            .add(Comment::new("a"))
            .add(Comment::new("b"))
            .render();
        assert_eq!(code, "// a\n\n// b\n");
    }

    #[test]
    fn test_empty_section_keeps_separator() {
        let code = CodeFile::new()
            .add(Comment::new("top"))
            .add_all(Vec::<Export>::new())
            .add(Import::new("./x").named("y"))
            .render();
        assert_eq!(code, "// top\n\n\nimport { y } from \"./x\"\n");
    }

    #[test]
    fn test_section_items_are_adjacent() {
        let code = CodeFile::new()
            .add_all([Export::all_from("./a"), Export::all_from("./b")])
            .render();
        assert_eq!(code, "export * from \"./a\"\nexport * from \"./b\"\n");
    }

    #[test]
    fn test_module_items_use_two_spaces() {
        let code = CodeFile::new()
            .add(Comment::new("top"))
            .add(DeclareModule::new("m").item(FnDecl::new("x")))
            .render();
        assert_eq!(code, "// top\n\ndeclare module \"m\" {\n  export function x()\n}\n");
    }
}
