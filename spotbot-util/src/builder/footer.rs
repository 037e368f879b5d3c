use twilight_model::channel::message::embed::EmbedFooter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterBuilder {
    text: String,
}

impl FooterBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn build(self) -> EmbedFooter {
        EmbedFooter {
            icon_url: None,
            proxy_icon_url: None,
            text: self.text,
        }
    }
}

impl From<&str> for FooterBuilder {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for FooterBuilder {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
