//! Ambient module augmentation builder.

use eventdts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A `declare module "<name>" { ... }` block.
///
/// Items are indented one level inside the block.
#[derive(Debug, Clone)]
pub struct DeclareModule {
    name: String,
    items: Vec<CodeFragment>,
}

impl DeclareModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add a declaration inside the block.
    pub fn item<R: Renderable>(mut self, node: R) -> Self {
        self.items.extend(node.to_fragments());
        self
    }

    /// Add declarations from an iterator.
    pub fn items<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.items.extend(node.to_fragments());
        }
        self
    }

    /// Build the block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for DeclareModule {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("declare module \"{}\" {{", self.name),
            self.items.clone(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FnDecl;

    #[test]
    fn test_empty_module() {
        let m = DeclareModule::new("@tauri-apps/api/event").build();
        assert_eq!(m, "declare module \"@tauri-apps/api/event\" {\n}\n");
    }

    #[test]
    fn test_items_are_indented() {
        let m = DeclareModule::new("events")
            .item(FnDecl::new("a"))
            .items([FnDecl::new("b"), FnDecl::new("c")])
            .build();
        assert_eq!(
            m,
            "declare module \"events\" {\n  export function a()\n  export function b()\n  export function c()\n}\n"
        );
    }
}
