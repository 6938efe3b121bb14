//! TypeScript re-export builder.

use eventdts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `export * from "<module>"` statements.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    /// Re-export everything from `module`.
    pub fn all_from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("export * from \"{}\"", self.from))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_export_all() {
        let e = Export::all_from("./click").build();
        assert_eq!(e, "export * from \"./click\"\n");
    }

    #[test]
    fn test_scoped_module() {
        let e = Export::all_from("@scope/pkg").build();
        assert_eq!(e, "export * from \"@scope/pkg\"\n");
    }
}
