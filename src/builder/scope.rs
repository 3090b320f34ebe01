use crate::node::{Content, LanguageSpan, Paragraph, Sentence};

/// Fills in a sentence. Obtained from the `sentence` method of an enclosing builder.
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    node: Sentence,
}

impl SentenceBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    inline_methods!();

    pub(crate) fn into_node(self) -> Sentence {
        self.node
    }

    fn push_content(&mut self, content: Content) -> &mut Self {
        self.node.push(content);
        self
    }
}

impl_text_write!(SentenceBuilder);

/// Fills in a paragraph. Obtained from the `paragraph` method of an enclosing builder.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    node: Paragraph,
}

impl ParagraphBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    inline_methods!();
    sentence_method!();

    pub(crate) fn into_node(self) -> Paragraph {
        self.node
    }

    fn push_content(&mut self, content: Content) -> &mut Self {
        self.node.push(content);
        self
    }
}

impl_text_write!(ParagraphBuilder);

/// Fills in a span spoken in another language. Obtained from the `lang` method of an enclosing
/// builder.
#[derive(Debug)]
pub struct LangBuilder {
    node: LanguageSpan,
}

impl LangBuilder {
    pub(crate) fn new<S: Into<String>>(lang: S) -> Self {
        Self {
            node: LanguageSpan::new(lang),
        }
    }

    inline_methods!();
    paragraph_method!();
    sentence_method!();

    pub(crate) fn into_node(self) -> LanguageSpan {
        self.node
    }

    fn push_content(&mut self, content: Content) -> &mut Self {
        self.node.push(content);
        self
    }
}

impl_text_write!(LangBuilder);
