use std::fmt;

/// A catalog entry: fixed text, or a template over positional arguments.
#[derive(Clone, Copy)]
pub enum Message {
    Literal(&'static str),
    Template(fn(&[&str]) -> String),
}

impl Message {
    /// Produce display text. Literals ignore `args`.
    #[must_use]
    pub fn render(self, args: &[&str]) -> String {
        match self {
            Self::Literal(text) => text.to_string(),
            Self::Template(render) => render(args),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Positional argument `index`, or an empty string when the caller passed fewer.
pub(crate) fn arg<'a>(args: &[&'a str], index: usize) -> &'a str {
    args.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_ignores_args() {
        assert_eq!(Message::Literal("Low").render(&["x"]), "Low");
    }

    #[test]
    fn template_receives_args() {
        let msg = Message::Template(|args| format!("<{}|{}>", arg(args, 0), arg(args, 1)));
        assert_eq!(msg.render(&["a", "b"]), "<a|b>");
        assert_eq!(msg.render(&["a"]), "<a|>");
    }
}
