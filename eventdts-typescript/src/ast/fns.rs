//! TypeScript function signature builder.

use eventdts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function signature.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for a bodiless exported function declaration, as found in `.d.ts`
/// files and ambient module blocks.
#[derive(Debug, Clone)]
pub struct FnDecl {
    name: String,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
}

impl FnDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
        }
    }

    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    fn signature(&self) -> String {
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };

        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "export function {}{}({}): {}",
                self.name, generics, params, ret
            ),
            None => format!("export function {}{}({})", self.name, generics, params),
        }
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for FnDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.signature())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_decl() {
        let f = FnDecl::new("ready").build();
        assert_eq!(f, "export function ready()\n");
    }

    #[test]
    fn test_decl_with_return() {
        let f = FnDecl::new("now").returns("number").build();
        assert_eq!(f, "export function now(): number\n");
    }

    #[test]
    fn test_listen_overload() {
        let f = FnDecl::new("listen")
            .generic("T")
            .param(Param::new("event", "\"click\""))
            .param(Param::new("handler", "EventCallback<clickEventPayload>"))
            .returns("Promise<UnlistenFn>")
            .build();
        assert_eq!(
            f,
            "export function listen<T>(event: \"click\", handler: EventCallback<clickEventPayload>): Promise<UnlistenFn>\n"
        );
    }

    #[test]
    fn test_multiple_generics() {
        let f = FnDecl::new("emit")
            .generic("K")
            .generic("V")
            .param(Param::new("payload", "V"))
            .build();
        assert_eq!(f, "export function emit<K, V>(payload: V)\n");
    }
}
