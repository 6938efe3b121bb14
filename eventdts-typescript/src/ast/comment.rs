use eventdts_codegen::{CodeFragment, Renderable};

/// A `//` line comment.
#[derive(Debug, Clone)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Renderable for Comment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("// {}", self.0))]
    }
}
